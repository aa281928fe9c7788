use serde::{Deserialize, Serialize};

/// Сервер, который обслуживает коллекцию
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiHost {
    /// API активов (активы, поставщики, группы контабельные)
    Assets,
    /// API персонала (ответственные лица)
    Personnel,
}
