pub mod api;
pub mod config;
pub mod forms;
pub mod image;
pub mod lifecycle;
pub mod list;
pub mod navigation;
pub mod reference;
pub mod serde_utils;
