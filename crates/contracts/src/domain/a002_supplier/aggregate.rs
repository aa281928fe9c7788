use serde::{Deserialize, Serialize};

use crate::domain::common::record_status::active_flag;
use crate::domain::common::{CollectionResource, EditableResource, EntityId, RecordStatus};
use crate::shared::forms::{FieldErrors, FieldKind, FieldSpec, FieldValues, Rule, TextPattern};
use crate::shared::serde_utils::{null_as_default, string_or_number};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик активов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// Номер телефона; API отдаёт его то числом, то строкой
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,

    /// Флаг `asset`: `false` скрывает поставщика из списков
    #[serde(rename = "asset", with = "active_flag", default)]
    pub status: RecordStatus,
}

impl CollectionResource for Supplier {
    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn endpoint() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }
}

// ============================================================================
// Form
// ============================================================================

static SUPPLIER_FORM: &[FieldSpec] = &[
    FieldSpec::new("name", "Nombre", FieldKind::Text)
        .placeholder("Nombre del proveedor")
        .rules(&[Rule::Required, Rule::MinLength(3)]),
    FieldSpec::new("address", "Dirección", FieldKind::Text)
        .placeholder("Dirección")
        .rules(&[Rule::Required]),
    FieldSpec::new("phone", "Celular", FieldKind::Text)
        .placeholder("70000000")
        .rules(&[
            Rule::Required,
            Rule::Pattern(TextPattern::Digits),
            Rule::MinLength(7),
        ]),
];

impl EditableResource for Supplier {
    fn form_schema() -> &'static [FieldSpec] {
        SUPPLIER_FORM
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::new()
            .with("name", self.name.clone())
            .with("address", self.address.clone())
            .with("phone", self.phone.clone())
    }

    fn apply_fields(&mut self, fields: &FieldValues) -> Result<(), FieldErrors> {
        self.name = fields.text("name");
        self.address = fields.text("address");
        self.phone = fields.text("phone");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_number_or_string() {
        let numeric: Supplier = serde_json::from_str(r#"{"_id":"s1","name":"A","phone":70012345}"#).unwrap();
        assert_eq!(numeric.phone, "70012345");
        let text: Supplier = serde_json::from_str(r#"{"_id":"s2","name":"B","phone":"7654321"}"#).unwrap();
        assert_eq!(text.phone, "7654321");
        let missing: Supplier = serde_json::from_str(r#"{"_id":"s3"}"#).unwrap();
        assert_eq!(missing.phone, "");
        assert!(missing.is_active());
    }

    #[test]
    fn test_new_supplier_is_sent_as_active() {
        let supplier = Supplier {
            name: "Importadora Andina".to_string(),
            ..Supplier::default()
        };
        let value = serde_json::to_value(&supplier).unwrap();
        assert_eq!(value["asset"], true);
        assert!(value.get("_id").is_none());
    }
}
