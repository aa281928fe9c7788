//! Справочники для выпадающих списков формы актива

use crate::domain::a002_supplier::aggregate::Supplier;
use crate::domain::a003_depreciation_category::aggregate::DepreciationCategory;
use crate::domain::a004_personnel::aggregate::Personnel;
use crate::domain::common::{CollectionResource, EntityId};
use crate::shared::api::{ApiError, CollectionClient, HttpTransport};
use crate::shared::config::ApiConfig;

/// Источник вариантов выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    Personnel,
    Suppliers,
    Categories,
}

impl ReferenceSource {
    /// Подпись пустого варианта
    pub fn prompt(&self) -> &'static str {
        match self {
            ReferenceSource::Personnel => "Seleccione un responsable",
            ReferenceSource::Suppliers => "Seleccione un proveedor",
            ReferenceSource::Categories => "Seleccione un grupo contable",
        }
    }
}

/// Вариант выбора: ключ `_id`, подпись из названия записи
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceOption {
    pub id: EntityId,
    pub label: String,
}

/// Варианты из активных записей; записи без `_id` или без названия пропускаются
pub fn to_options<R: CollectionResource>(records: &[R]) -> Vec<ReferenceOption> {
    records
        .iter()
        .filter(|r| r.is_active())
        .filter_map(|r| {
            let label = r.display_name().trim();
            let id = r.id()?;
            (!label.is_empty()).then(|| ReferenceOption {
                id: id.clone(),
                label: label.to_string(),
            })
        })
        .collect()
}

pub fn label_for<'a>(options: &'a [ReferenceOption], id: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.id.as_str() == id)
        .map(|o| o.label.as_str())
}

async fn fetch_options<R: CollectionResource, T: HttpTransport>(
    config: &ApiConfig,
    transport: T,
    bearer: Option<String>,
) -> Result<Vec<ReferenceOption>, ApiError> {
    let records = CollectionClient::<R, T>::from_config(config, transport)
        .with_bearer(bearer)
        .list()
        .await?;
    Ok(to_options(&records))
}

/// Загрузить варианты справочника (без кэширования)
pub async fn load_reference_options<T: HttpTransport>(
    source: ReferenceSource,
    config: &ApiConfig,
    transport: T,
    bearer: Option<String>,
) -> Result<Vec<ReferenceOption>, ApiError> {
    match source {
        ReferenceSource::Personnel => fetch_options::<Personnel, T>(config, transport, bearer).await,
        ReferenceSource::Suppliers => fetch_options::<Supplier, T>(config, transport, bearer).await,
        ReferenceSource::Categories => {
            fetch_options::<DepreciationCategory, T>(config, transport, bearer).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::memory::{MemoryApi, TEST_ASSETS_BASE, TEST_PERSONNEL_BASE};
    use serde_json::json;

    fn config() -> ApiConfig {
        ApiConfig {
            assets_base: TEST_ASSETS_BASE.to_string(),
            personnel_base: TEST_PERSONNEL_BASE.to_string(),
        }
    }

    #[tokio::test]
    async fn test_supplier_options_skip_archived() {
        let api = MemoryApi::default();
        api.seed(
            "supplier",
            vec![
                json!({"_id": "s1", "name": "Importadora Andina", "asset": true}),
                json!({"_id": "s2", "name": "Proveedor Viejo", "asset": false}),
                json!({"_id": "s3", "name": "  "}),
            ],
        );
        let options = load_reference_options(ReferenceSource::Suppliers, &config(), &api, None)
            .await
            .unwrap();
        assert_eq!(
            options,
            vec![ReferenceOption {
                id: EntityId::new("s1"),
                label: "Importadora Andina".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_personnel_options_come_from_personnel_host() {
        let api = MemoryApi::default();
        api.seed("personal", vec![json!({"_id": "p1", "name": "Ana Quispe"})]);
        let options = load_reference_options(ReferenceSource::Personnel, &config(), &api, None)
            .await
            .unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(api.requests()[0].url, "http://personnel.test/api/personal");
    }

    #[tokio::test]
    async fn test_category_options_use_category_name() {
        let api = MemoryApi::default();
        api.seed(
            "depreciation-asset-list",
            vec![json!({"_id": "c1", "assetCategory": "Equipos de computación", "usefulLife": 4, "asset": false})],
        );
        let options = load_reference_options(ReferenceSource::Categories, &config(), &api, None)
            .await
            .unwrap();
        assert_eq!(options[0].label, "Equipos de computación");
        assert_eq!(label_for(&options, "c1"), Some("Equipos de computación"));
        assert_eq!(label_for(&options, "zz"), None);
    }

    #[tokio::test]
    async fn test_load_failure_is_reported() {
        let api = MemoryApi::default();
        api.fail_next(503, "");
        let err = load_reference_options(ReferenceSource::Suppliers, &config(), &api, None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
