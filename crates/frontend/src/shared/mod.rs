pub mod api_utils;
pub mod collection;
pub mod date_utils;
pub mod drawer;
pub mod icons;
pub mod list_utils;
