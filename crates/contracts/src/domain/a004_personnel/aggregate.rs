use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiHost, CollectionResource, EntityId, RecordStatus};
use crate::shared::serde_utils::null_as_default;

/// Сотрудник, который может отвечать за актив. Только для выбора в форме актива.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl CollectionResource for Personnel {
    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn status(&self) -> RecordStatus {
        RecordStatus::Active
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "personnel"
    }

    fn endpoint() -> &'static str {
        "personal"
    }

    fn element_name() -> &'static str {
        "Responsable"
    }

    fn list_name() -> &'static str {
        "Personal"
    }

    fn host() -> ApiHost {
        ApiHost::Personnel
    }

    fn list_path() -> String {
        Self::endpoint().to_string()
    }
}
