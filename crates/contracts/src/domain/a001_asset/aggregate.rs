use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::record_status::deleted_flag;
use crate::domain::common::{CollectionResource, EditableResource, EntityId, RecordStatus};
use crate::shared::forms::{
    parse_date, parse_number, FieldErrors, FieldKind, FieldSpec, FieldValues, Rule, TextPattern,
};
use crate::shared::reference::ReferenceSource;
use crate::shared::serde_utils::{flexible_date, null_as_default, number_or_string};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Актив (единица инвентаря, подлежащая амортизации)
///
/// Ответственный, поставщик и группа хранятся по названию, как их хранит API.
/// `depreciated_value`, `ufv3`, `ufv4` рассчитывает сервер; консоль их только показывает.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsible: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supplier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(default, deserialize_with = "number_or_string")]
    pub price: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub worth: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub amount: f64,

    #[serde(default, with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub date_acquisition: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_date", skip_serializing_if = "Option::is_none")]
    pub warranty_expiration_date: Option<DateTime<Utc>>,

    #[serde(rename = "isDeleted", with = "deleted_flag", default)]
    pub status: RecordStatus,

    #[serde(default, deserialize_with = "number_or_string")]
    pub depreciated_value: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_category_asset: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub ufv3: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub ufv4: f64,

    /// Изображение: data URL или голый base64
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: String,
}

impl CollectionResource for Asset {
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "asset"
    }

    fn endpoint() -> &'static str {
        "asset"
    }

    fn element_name() -> &'static str {
        "Activo"
    }

    fn list_name() -> &'static str {
        "Activos"
    }
}

// ============================================================================
// Form
// ============================================================================

static ASSET_FORM: &[FieldSpec] = &[
    FieldSpec::new("file", "Imagen", FieldKind::Image),
    FieldSpec::new("name", "Nombre", FieldKind::Text)
        .placeholder("Nombre del activo")
        .rules(&[
            Rule::Required,
            Rule::MinLength(3),
            Rule::Pattern(TextPattern::LettersAndSpaces),
        ]),
    FieldSpec::new("description", "Descripción", FieldKind::TextArea)
        .placeholder("Descripción del activo"),
    FieldSpec::new("responsible", "Responsable", FieldKind::Reference(ReferenceSource::Personnel))
        .rules(&[Rule::Required]),
    FieldSpec::new("supplier", "Proveedor", FieldKind::Reference(ReferenceSource::Suppliers))
        .rules(&[Rule::Required]),
    FieldSpec::new("location", "Ubicación", FieldKind::Text)
        .placeholder("Ubicación del activo")
        .rules(&[Rule::Required]),
    FieldSpec::new("price", "Precio", FieldKind::Number)
        .placeholder("0.00")
        .rules(&[Rule::Required, Rule::Positive]),
    FieldSpec::new("amount", "Cantidad", FieldKind::Number).placeholder("1"),
    FieldSpec::new("dateAcquisition", "Fecha de adquisición", FieldKind::Date)
        .rules(&[Rule::Required]),
    FieldSpec::new("warrantyExpirationDate", "Vencimiento de la garantía", FieldKind::Date)
        .rules(&[Rule::Required]),
    FieldSpec::new(
        "typeCategoryAsset",
        "Grupo contable",
        FieldKind::Reference(ReferenceSource::Categories),
    )
    .rules(&[Rule::Required]),
];

/// Число для поля ввода: ноль показывается пустым полем
pub(crate) fn number_field(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

fn date_field(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Дата из поля формы. Если день не изменился, сохраняется исходное время записи.
fn date_value(
    fields: &FieldValues,
    name: &str,
    current: Option<DateTime<Utc>>,
    errors: &mut FieldErrors,
) -> Option<DateTime<Utc>> {
    let raw = fields.text(name);
    if raw.is_empty() {
        return None;
    }
    let Some(date) = parse_date(&raw) else {
        errors.insert(name, "Fecha inválida");
        return None;
    };
    if current.is_some_and(|dt| dt.date_naive() == date) {
        return current;
    }
    match date.and_hms_opt(0, 0, 0) {
        Some(midnight) => Some(midnight.and_utc()),
        None => {
            errors.insert(name, "Fecha inválida");
            None
        }
    }
}

impl EditableResource for Asset {
    fn form_schema() -> &'static [FieldSpec] {
        ASSET_FORM
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::new()
            .with("file", self.file.clone())
            .with("name", self.name.clone())
            .with("description", self.description.clone())
            .with("responsible", self.responsible.clone())
            .with("supplier", self.supplier.clone())
            .with("location", self.location.clone())
            .with("price", number_field(self.price))
            .with("amount", number_field(self.amount))
            .with("dateAcquisition", date_field(self.date_acquisition))
            .with("warrantyExpirationDate", date_field(self.warranty_expiration_date))
            .with("typeCategoryAsset", self.type_category_asset.clone())
    }

    fn apply_fields(&mut self, fields: &FieldValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let price = parse_number(fields.get("price"));
        if price.is_none() {
            errors.insert("price", "Precio debe ser un número");
        }
        let amount_raw = fields.text("amount");
        let amount = if amount_raw.is_empty() {
            Some(0.0)
        } else {
            parse_number(&amount_raw)
        };
        if amount.is_none() {
            errors.insert("amount", "Cantidad debe ser un número");
        }
        let date_acquisition = date_value(fields, "dateAcquisition", self.date_acquisition, &mut errors);
        let warranty_expiration_date = date_value(
            fields,
            "warrantyExpirationDate",
            self.warranty_expiration_date,
            &mut errors,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        self.file = fields.text("file");
        self.name = fields.text("name");
        self.description = fields.text("description");
        self.responsible = fields.text("responsible");
        self.supplier = fields.text("supplier");
        self.location = fields.text("location");
        self.price = price.unwrap_or_default();
        self.amount = amount.unwrap_or_default();
        self.date_acquisition = date_acquisition;
        self.warranty_expiration_date = warranty_expiration_date;
        self.type_category_asset = fields.text("typeCategoryAsset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::memory::{MemoryApi, TEST_ASSETS_BASE, TEST_PERSONNEL_BASE};
    use crate::shared::api::{CollectionClient, Method};
    use crate::shared::config::ApiConfig;
    use crate::shared::forms::{FormError, FormState};
    use chrono::Datelike;
    use serde_json::json;

    fn config() -> ApiConfig {
        ApiConfig {
            assets_base: TEST_ASSETS_BASE.to_string(),
            personnel_base: TEST_PERSONNEL_BASE.to_string(),
        }
    }

    fn fill_valid(form: &mut FormState<Asset>) {
        form.change("name", "Laptop Dell");
        form.change("responsible", "Ana Quispe");
        form.change("supplier", "Importadora Andina");
        form.change("location", "Oficina central");
        form.change("price", "4500");
        form.change("dateAcquisition", "2024-02-01");
        form.change("warrantyExpirationDate", "2026-02-01");
        form.change("typeCategoryAsset", "Equipos de computación");
    }

    #[test]
    fn test_deserialize_server_record() {
        let json = r#"{
            "_id": "64a1f0",
            "name": "Laptop",
            "description": null,
            "price": 4500,
            "amount": "2",
            "dateAcquisition": "2023-06-27T00:00:00.000Z",
            "warrantyExpirationDate": "2025-06-27T15:10",
            "isDeleted": false,
            "depreciatedValue": 3100.5,
            "typeCategoryAsset": "Equipos de computación",
            "ufv3": 2.41,
            "file": "iVBORw0KGgo="
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id(), Some(&EntityId::new("64a1f0")));
        assert_eq!(asset.description, "");
        assert_eq!(asset.amount, 2.0);
        assert_eq!(asset.date_acquisition.unwrap().year(), 2023);
        assert_eq!(asset.warranty_expiration_date.unwrap().month(), 6);
        assert_eq!(asset.ufv4, 0.0);
        assert!(asset.is_active());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let asset = Asset {
            name: "Mesa".to_string(),
            type_category_asset: "Muebles".to_string(),
            ..Asset::default()
        };
        let value = serde_json::to_value(&asset).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["typeCategoryAsset"], "Muebles");
        assert_eq!(value["isDeleted"], false);
        assert_eq!(value["depreciatedValue"], 0.0);
    }

    #[test]
    fn test_short_name_blocks_submission() {
        let mut form = FormState::<Asset>::default();
        form.open_create();
        fill_valid(&mut form);
        form.change("name", "La");
        match form.begin_submit() {
            Err(FormError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.get("name"), Some("Nombre debe tener al menos 3 caracteres"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_location_blocks_submission() {
        let mut form = FormState::<Asset>::default();
        form.open_create();
        fill_valid(&mut form);
        form.change("location", "");
        assert_eq!(form.error("location"), Some("El campo Ubicación es obligatorio"));
        assert!(matches!(form.begin_submit(), Err(FormError::Invalid(_))));
    }

    #[test]
    fn test_apply_fields_builds_record() {
        let mut form = FormState::<Asset>::default();
        form.open_create();
        fill_valid(&mut form);
        let record = form.begin_submit().unwrap().record;
        assert_eq!(record.price, 4500.0);
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.date_acquisition.unwrap().day(), 1);
        assert_eq!(record.type_category_asset, "Equipos de computación");
        assert_eq!(record.status, RecordStatus::Active);
    }

    #[tokio::test]
    async fn test_deleted_assets_are_hidden_from_list() {
        let api = MemoryApi::default();
        api.seed(
            "asset",
            vec![
                json!({"_id": "1", "name": "Laptop", "isDeleted": false}),
                json!({"_id": "2", "name": "Chair", "isDeleted": true}),
            ],
        );
        let client = CollectionClient::<Asset, _>::from_config(&config(), &api);
        let rows = client.list_active().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Laptop");
    }

    #[tokio::test]
    async fn test_edit_sends_full_record_with_put() {
        let api = MemoryApi::default();
        api.seed(
            "asset",
            vec![json!({
                "_id": "1",
                "name": "Laptop",
                "responsible": "Ana Quispe",
                "supplier": "Importadora Andina",
                "location": "Oficina central",
                "price": 4500,
                "dateAcquisition": "2024-02-01T00:00:00.000Z",
                "warrantyExpirationDate": "2026-02-01T15:10:00.000Z",
                "typeCategoryAsset": "Equipos de computación",
                "depreciatedValue": 3800,
                "ufv3": 2.41,
                "isDeleted": false
            })],
        );
        let client = CollectionClient::<Asset, _>::from_config(&config(), &api);
        let id = EntityId::new("1");

        let mut form = FormState::<Asset>::default();
        let ticket = form.open_edit(id.clone());
        let loaded = client.get(&id).await;
        assert!(form.finish_load(ticket, loaded));
        assert_eq!(form.value("dateAcquisition"), "2024-02-01");

        form.change("name", "Laptop Pro");
        form.change("location", "Almacén");
        form.change("dateAcquisition", "2024-03-15");
        let request = form.begin_submit().unwrap();
        let result = client.submit(&request).await;
        assert!(form.finish_submit(result));

        let put = api.requests().into_iter().find(|r| r.method == Method::Put).unwrap();
        assert_eq!(put.url, "http://assets.test/api/asset/1");
        let body: serde_json::Value = serde_json::from_str(put.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["_id"], "1");
        assert_eq!(body["location"], "Almacén");
        assert_eq!(body["depreciatedValue"], 3800.0);
        assert_eq!(body["ufv3"], 2.41);
        assert_eq!(body["name"], "Laptop Pro");
        assert_eq!(body["dateAcquisition"], "2024-03-15T00:00:00.000Z");
        assert_eq!(body["warrantyExpirationDate"], "2026-02-01T15:10:00.000Z");

        let stored = client.get(&id).await.unwrap();
        assert_eq!(api.requests().last().unwrap().url, "http://assets.test/api/asset/1");
        assert_eq!(stored.name, "Laptop Pro");
        assert_eq!(stored.location, "Almacén");
    }

    #[tokio::test]
    async fn test_missing_required_field_sends_no_request() {
        let api = MemoryApi::default();
        let client = CollectionClient::<Asset, _>::from_config(&config(), &api);

        let mut form = FormState::<Asset>::default();
        form.open_create();
        fill_valid(&mut form);
        form.change("name", "");
        match form.begin_submit() {
            Ok(request) => panic!("submitted without a name: {:?}", client.submit(&request).await),
            Err(FormError::Invalid(errors)) => {
                assert_eq!(errors.get("name"), Some("El campo Nombre es obligatorio"));
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
        assert!(form.is_open());
        assert!(api.requests().is_empty());
    }
}
