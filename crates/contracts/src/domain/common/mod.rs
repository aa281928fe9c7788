//! Common types and traits for all collection resources

pub mod api_host;
pub mod collection_resource;
pub mod entity_id;
pub mod record_status;

// Re-exports
pub use api_host::ApiHost;
pub use collection_resource::{CollectionResource, EditableResource};
pub use entity_id::EntityId;
pub use record_status::RecordStatus;
