use serde::{Deserialize, Serialize};

use crate::domain::a001_asset::aggregate::number_field;
use crate::domain::common::{CollectionResource, EditableResource, EntityId, RecordStatus};
use crate::shared::forms::{parse_number, FieldErrors, FieldKind, FieldSpec, FieldValues, Rule};
use crate::shared::serde_utils::{null_as_default, number_or_string};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Группа контабельная: категория активов и срок полезного использования (лет).
///
/// Флаг `asset` классифицирует группу и не влияет на видимость: группы всегда активны.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationCategory {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_category: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub useful_life: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset: bool,
}

impl CollectionResource for DepreciationCategory {
    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn status(&self) -> RecordStatus {
        RecordStatus::Active
    }

    fn display_name(&self) -> &str {
        &self.asset_category
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "depreciation_category"
    }

    fn endpoint() -> &'static str {
        "depreciation-asset-list"
    }

    fn element_name() -> &'static str {
        "Grupo Contable"
    }

    fn list_name() -> &'static str {
        "Grupos Contables"
    }
}

// ============================================================================
// Form
// ============================================================================

static CATEGORY_FORM: &[FieldSpec] = &[
    FieldSpec::new("assetCategory", "Grupo contable", FieldKind::Text)
        .placeholder("Nombre del grupo")
        .rules(&[Rule::Required, Rule::MinLength(3)]),
    FieldSpec::new("usefulLife", "Vida útil", FieldKind::Number)
        .placeholder("Años")
        .rules(&[Rule::Required, Rule::Positive]),
];

impl EditableResource for DepreciationCategory {
    fn form_schema() -> &'static [FieldSpec] {
        CATEGORY_FORM
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::new()
            .with("assetCategory", self.asset_category.clone())
            .with("usefulLife", number_field(self.useful_life))
    }

    fn apply_fields(&mut self, fields: &FieldValues) -> Result<(), FieldErrors> {
        let Some(useful_life) = parse_number(fields.get("usefulLife")) else {
            let mut errors = FieldErrors::new();
            errors.insert("usefulLife", "Vida útil debe ser un número");
            return Err(errors);
        };
        self.asset_category = fields.text("assetCategory");
        self.useful_life = useful_life;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::memory::{MemoryApi, TEST_ASSETS_BASE, TEST_PERSONNEL_BASE};
    use crate::shared::api::{CollectionClient, Method};
    use crate::shared::config::ApiConfig;
    use crate::shared::forms::FormState;
    use serde_json::json;

    #[test]
    fn test_category_flag_does_not_hide_record() {
        let category: DepreciationCategory =
            serde_json::from_str(r#"{"_id":"c1","assetCategory":"Vehículos","usefulLife":"5","asset":false}"#).unwrap();
        assert_eq!(category.useful_life, 5.0);
        assert!(category.is_active());
    }

    #[test]
    fn test_useful_life_must_be_positive() {
        let mut form = FormState::<DepreciationCategory>::default();
        form.open_create();
        form.change("assetCategory", "Vehículos");
        form.change("usefulLife", "0");
        assert_eq!(form.error("usefulLife"), Some("Vida útil debe ser mayor que cero"));
    }

    #[tokio::test]
    async fn test_create_posts_to_collection_and_appears_once() {
        let api = MemoryApi::default();
        api.seed("depreciation-asset-list", vec![json!({"_id": "c1", "assetCategory": "Muebles", "usefulLife": 10})]);
        let config = ApiConfig {
            assets_base: TEST_ASSETS_BASE.to_string(),
            personnel_base: TEST_PERSONNEL_BASE.to_string(),
        };
        let client = CollectionClient::<DepreciationCategory, _>::from_config(&config, &api);

        let mut form = FormState::<DepreciationCategory>::default();
        form.open_create();
        form.change("assetCategory", "Vehículos");
        form.change("usefulLife", "5");
        let request = form.begin_submit().unwrap();
        let result = client.submit(&request).await;
        assert!(form.finish_submit(result));

        let post = api.requests().into_iter().find(|r| r.method == Method::Post).unwrap();
        assert_eq!(post.url, "http://assets.test/api/depreciation-asset-list/");

        let rows = client.list_active().await.unwrap();
        assert_eq!(rows.len(), 2);
        let created: Vec<_> = rows.iter().filter(|c| c.asset_category == "Vehículos").collect();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].useful_life, 5.0);
    }
}
