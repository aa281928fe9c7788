use serde::{de::DeserializeOwned, Serialize};

use super::{ApiHost, EntityId, RecordStatus};
use crate::shared::forms::{FieldErrors, FieldSpec, FieldValues};

/// Трейт для записи, которую отдаёт REST-коллекция внешнего API
///
/// Определяет обязательные методы и метаданные для всех коллекций консоли
pub trait CollectionResource:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи (у новой записи его ещё нет)
    fn id(&self) -> Option<&EntityId>;

    /// Получить состояние записи
    fn status(&self) -> RecordStatus;

    /// Получить название записи для списков и выпадающих списков
    fn display_name(&self) -> &str;

    // ============================================================================
    // Метаданные класса (статические данные)
    // ============================================================================

    /// Индекс коллекции в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "asset")
    fn collection_name() -> &'static str;

    /// Сегмент пути REST API (например, "asset" или "depreciation-asset-list")
    fn endpoint() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Activo")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Activos")
    fn list_name() -> &'static str;

    /// Сервер, который обслуживает коллекцию
    fn host() -> ApiHost {
        ApiHost::Assets
    }

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя коллекции для системы, оно же ключ вкладки (например, "a001_asset")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Относительный путь списка (например, "asset/")
    fn list_path() -> String {
        format!("{}/", Self::endpoint())
    }

    /// Относительный путь записи (например, "asset/64a1f0")
    fn item_path(id: &EntityId) -> String {
        format!("{}/{}", Self::endpoint(), urlencoding::encode(id.as_str()))
    }

    fn is_active(&self) -> bool {
        self.status().is_active()
    }
}

/// Запись, которую можно создать или изменить через общую форму
pub trait EditableResource: CollectionResource + Default {
    /// Поля формы в порядке отображения
    fn form_schema() -> &'static [FieldSpec];

    /// Значения полей формы для существующей записи
    fn to_fields(&self) -> FieldValues;

    /// Перенести проверенные значения формы в запись
    fn apply_fields(&mut self, fields: &FieldValues) -> Result<(), FieldErrors>;

    /// Значения полей пустой формы
    fn blank_fields() -> FieldValues {
        Self::default().to_fields()
    }
}
