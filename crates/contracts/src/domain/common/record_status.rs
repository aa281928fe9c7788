use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Состояние записи. Списки показывают только `Active`.
///
/// На сервере состояние кодируется по-разному: у активов флагом `isDeleted`,
/// у поставщиков флагом `asset`. Модули `deleted_flag` и `active_flag`
/// переводят эти флаги в одно перечисление.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Active,
    Archived,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        self == RecordStatus::Active
    }

    pub fn from_deleted_flag(is_deleted: bool) -> Self {
        if is_deleted {
            RecordStatus::Archived
        } else {
            RecordStatus::Active
        }
    }

    pub fn from_active_flag(active: bool) -> Self {
        if active {
            RecordStatus::Active
        } else {
            RecordStatus::Archived
        }
    }
}

/// `isDeleted: bool` <-> `RecordStatus`. Отсутствующий или `null` флаг означает `Active`.
pub mod deleted_flag {
    use super::*;

    pub fn serialize<S: Serializer>(status: &RecordStatus, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(!status.is_active())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordStatus, D::Error> {
        let flag = Option::<bool>::deserialize(deserializer)?;
        Ok(RecordStatus::from_deleted_flag(flag.unwrap_or(false)))
    }
}

/// `asset: bool` <-> `RecordStatus`. Отсутствующий или `null` флаг означает `Active`.
pub mod active_flag {
    use super::*;

    pub fn serialize<S: Serializer>(status: &RecordStatus, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(status.is_active())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordStatus, D::Error> {
        let flag = Option::<bool>::deserialize(deserializer)?;
        Ok(RecordStatus::from_active_flag(flag.unwrap_or(true)))
    }
}
