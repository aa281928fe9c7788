pub mod list_model;

pub use list_model::{active_only, ListModel, ListPhase};
