use chrono::NaiveDate;

use super::{FieldErrors, FieldKind, FieldSpec, FieldValues, Rule, TextPattern};

/// Проверить одно поле. Возвращает первое нарушенное правило.
///
/// Пустое необязательное поле считается корректным, остальные правила к нему не применяются.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return spec
            .is_required()
            .then(|| format!("El campo {} es obligatorio", spec.label));
    }

    match spec.kind {
        FieldKind::Number if parse_number(value).is_none() => {
            return Some(format!("{} debe ser un número", spec.label));
        }
        FieldKind::Date if parse_date(value).is_none() => {
            return Some(format!("{} debe ser una fecha válida", spec.label));
        }
        _ => {}
    }

    for rule in spec.rules {
        let failed = match rule {
            Rule::Required => None,
            Rule::MinLength(min) => (value.chars().count() < *min)
                .then(|| format!("{} debe tener al menos {} caracteres", spec.label, min)),
            Rule::Pattern(TextPattern::LettersAndSpaces) => (!TextPattern::LettersAndSpaces
                .matches(value))
            .then(|| format!("{} solo puede contener letras", spec.label)),
            Rule::Pattern(TextPattern::Digits) => (!TextPattern::Digits.matches(value))
                .then(|| format!("{} solo puede contener números", spec.label)),
            Rule::Positive => parse_number(value)
                .map_or(true, |number| number <= 0.0)
                .then(|| format!("{} debe ser mayor que cero", spec.label)),
        };
        if failed.is_some() {
            return failed;
        }
    }
    None
}

/// Проверить все поля схемы
pub fn validate_all(schema: &[FieldSpec], values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for spec in schema {
        if let Some(message) = validate_field(spec, values.get(spec.name)) {
            errors.insert(spec.name, message);
        }
    }
    errors
}

/// Число из поля ввода; допускается десятичная запятая
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Дата из `<input type="date">`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
