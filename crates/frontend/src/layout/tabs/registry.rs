//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Ключи табов совпадают с `full_name()` ресурсов и с константами
//! `contracts::shared::navigation`.

use crate::domain::a001_asset::ui::list::AssetList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_depreciation_category::ui::list::DepreciationCategoryList;
use crate::system::pages::home::HomePage;
use contracts::shared::navigation::{
    ASSET_LIST_TAB, ASSET_NEW_TAB, CATEGORY_LIST_TAB, HOME_TAB, SUPPLIER_LIST_TAB,
    SUPPLIER_NEW_TAB,
};
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Табы `*_new` открывают тот же список, но сразу с панелью создания.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        HOME_TAB => view! { <HomePage /> }.into_any(),

        // a001: Activos
        ASSET_LIST_TAB => view! { <AssetList /> }.into_any(),
        ASSET_NEW_TAB => view! { <AssetList open_create=true /> }.into_any(),

        // a002: Proveedores
        SUPPLIER_LIST_TAB => view! { <SupplierList /> }.into_any(),
        SUPPLIER_NEW_TAB => view! { <SupplierList open_create=true /> }.into_any(),

        // a003: Grupos contables
        CATEGORY_LIST_TAB => view! { <DepreciationCategoryList /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Página no disponible"}</div> }.into_any()
        }
    }
}
