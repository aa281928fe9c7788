/// Утилиты для отображения значений в таблицах списков

/// Обрезает текст до `limit` символов и дописывает `ellipsis`.
/// Считает символы, а не байты, поэтому безопасна для "ñ" и "á".
pub fn truncate_text(text: &str, limit: usize, ellipsis: &str) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let head: String = text.chars().take(limit).collect();
    format!("{}{}", head, ellipsis)
}

/// Число для ячейки таблицы: целые без дробной части, иначе два знака
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
