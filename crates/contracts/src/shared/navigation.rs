//! Статическое меню консоли

/// Куда ведёт пункт меню
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Открыть вкладку с ключом
    Tab(&'static str),
    /// Раскрывающаяся группа
    Group(&'static [NavEntry]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub target: NavTarget,
}

pub const HOME_TAB: &str = "home";
pub const ASSET_LIST_TAB: &str = "a001_asset";
pub const SUPPLIER_LIST_TAB: &str = "a002_supplier";
pub const CATEGORY_LIST_TAB: &str = "a003_depreciation_category";
/// Вкладка списка активов с открытой формой создания
pub const ASSET_NEW_TAB: &str = "a001_asset_new";
pub const SUPPLIER_NEW_TAB: &str = "a002_supplier_new";

static MENU: &[NavEntry] = &[
    NavEntry {
        id: "home",
        title: "Hogar",
        icon: "home",
        target: NavTarget::Tab(HOME_TAB),
    },
    NavEntry {
        id: "activos",
        title: "Activos",
        icon: "package",
        target: NavTarget::Group(&[
            NavEntry {
                id: "activos-list",
                title: "Activos",
                icon: "list",
                target: NavTarget::Tab(ASSET_LIST_TAB),
            },
            NavEntry {
                id: "activos-new",
                title: "Nuevo Activo",
                icon: "plus",
                target: NavTarget::Tab(ASSET_NEW_TAB),
            },
            NavEntry {
                id: "grupos-contables",
                title: "Grupos Contables",
                icon: "layers",
                target: NavTarget::Tab(CATEGORY_LIST_TAB),
            },
        ]),
    },
    NavEntry {
        id: "proveedores",
        title: "Proveedores",
        icon: "truck",
        target: NavTarget::Group(&[
            NavEntry {
                id: "proveedores-list",
                title: "Proveedores",
                icon: "list",
                target: NavTarget::Tab(SUPPLIER_LIST_TAB),
            },
            NavEntry {
                id: "proveedores-new",
                title: "Nuevo Proveedor",
                icon: "plus",
                target: NavTarget::Tab(SUPPLIER_NEW_TAB),
            },
        ]),
    },
];

pub fn menu() -> &'static [NavEntry] {
    MENU
}

/// Заголовок вкладки по ключу
pub fn title_for_tab(key: &str) -> Option<&'static str> {
    fn search(entries: &'static [NavEntry], key: &str) -> Option<&'static str> {
        entries.iter().find_map(|entry| match entry.target {
            NavTarget::Tab(tab) if tab == key => Some(entry.title),
            NavTarget::Tab(_) => None,
            NavTarget::Group(children) => search(children, key),
        })
    }
    search(MENU, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::aggregate::Asset;
    use crate::domain::a002_supplier::aggregate::Supplier;
    use crate::domain::a003_depreciation_category::aggregate::DepreciationCategory;
    use crate::domain::common::CollectionResource;

    #[test]
    fn test_menu_shape() {
        let titles: Vec<&str> = menu().iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Hogar", "Activos", "Proveedores"]);
        match menu()[1].target {
            NavTarget::Group(children) => {
                let titles: Vec<&str> = children.iter().map(|e| e.title).collect();
                assert_eq!(titles, vec!["Activos", "Nuevo Activo", "Grupos Contables"]);
            }
            NavTarget::Tab(_) => panic!("Activos must be a group"),
        }
    }

    #[test]
    fn test_tab_keys_match_collections() {
        assert_eq!(Asset::full_name(), ASSET_LIST_TAB);
        assert_eq!(Supplier::full_name(), SUPPLIER_LIST_TAB);
        assert_eq!(DepreciationCategory::full_name(), CATEGORY_LIST_TAB);
    }

    #[test]
    fn test_titles_and_new_tabs() {
        assert_eq!(title_for_tab(HOME_TAB), Some("Hogar"));
        assert_eq!(title_for_tab(CATEGORY_LIST_TAB), Some("Grupos Contables"));
        assert_eq!(title_for_tab("unknown"), None);
    }
}
