//! Tab management module
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View (единственный источник правды)
//! - `tab_bar` - полоса заголовков открытых табов

pub mod page;
pub mod registry;
pub mod tab_bar;

pub use page::TabPage;
pub use tab_bar::TabBar;
