//! Схемы полей, проверка значений и состояние общей формы создания/редактирования

pub mod field_spec;
pub mod form_state;
pub mod validation;
pub mod values;

pub use field_spec::{FieldKind, FieldSpec, Rule, TextPattern};
pub use form_state::{FormError, FormMode, FormPhase, FormState, SubmitRequest};
pub use validation::{parse_date, parse_number, validate_all, validate_field};
pub use values::{FieldErrors, FieldValues};
