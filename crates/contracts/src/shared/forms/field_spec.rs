use crate::shared::reference::ReferenceSource;

/// Вид поля ввода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    /// Дата в формате `YYYY-MM-DD`
    Date,
    /// Выбор из справочника; в запись сохраняется название выбранного элемента
    Reference(ReferenceSource),
    /// Изображение, хранится как data URL
    Image,
}

/// Допустимые символы текстового поля
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPattern {
    /// Латинские буквы и пробелы
    LettersAndSpaces,
    /// Только цифры
    Digits,
}

impl TextPattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            TextPattern::LettersAndSpaces => value.chars().all(|c| c.is_ascii_alphabetic() || c == ' '),
            TextPattern::Digits => value.chars().all(|c| c.is_ascii_digit()),
        }
    }
}

/// Правило проверки поля
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    Pattern(TextPattern),
    /// Число строго больше нуля
    Positive,
}

/// Описание поля формы
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Имя поля (совпадает с именем в JSON)
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind,
            rules: &[],
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self { placeholder, ..self }
    }

    pub const fn rules(self, rules: &'static [Rule]) -> Self {
        Self { rules, ..self }
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    /// Значение атрибута `type` для `<input>`
    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Image => "file",
            _ => "text",
        }
    }
}

/// Найти поле схемы по имени
pub fn find_field(schema: &'static [FieldSpec], name: &str) -> Option<&'static FieldSpec> {
    schema.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns() {
        assert!(TextPattern::LettersAndSpaces.matches("Silla de oficina"));
        assert!(!TextPattern::LettersAndSpaces.matches("Silla 2"));
        assert!(!TextPattern::LettersAndSpaces.matches("Año"));
        assert!(TextPattern::Digits.matches("70012345"));
        assert!(!TextPattern::Digits.matches("700-123"));
    }

    #[test]
    fn test_builder_keeps_other_fields() {
        const SPEC: FieldSpec = FieldSpec::new("price", "Precio", FieldKind::Number)
            .placeholder("0")
            .rules(&[Rule::Required, Rule::Positive]);
        assert_eq!(SPEC.name, "price");
        assert_eq!(SPEC.placeholder, "0");
        assert!(SPEC.is_required());
        assert_eq!(SPEC.input_type(), "number");
    }
}
