/// Utilities for date formatting in tables
use chrono::{DateTime, Utc};

/// Format a timestamp to DD/MM/YYYY, or "-" when missing
/// Example: 2024-03-15T00:00:00Z -> "15/03/2024"
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(Some(dt)), "15/03/2024");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date(None), "-");
    }
}
