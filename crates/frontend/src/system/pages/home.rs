use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::{
    title_for_tab, ASSET_LIST_TAB, ASSET_NEW_TAB, CATEGORY_LIST_TAB, SUPPLIER_LIST_TAB,
};
use leptos::prelude::*;
use thaw::*;

const SHORTCUTS: &[(&str, &str)] = &[
    (ASSET_LIST_TAB, "package"),
    (ASSET_NEW_TAB, "plus"),
    (SUPPLIER_LIST_TAB, "truck"),
    (CATEGORY_LIST_TAB, "layers"),
];

/// Стартовая вкладка с быстрыми переходами
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="page">
            <div class="header">
                <h2 class="header__title">"Hogar"</h2>
            </div>
            <Flex gap=FlexGap::Medium>
                {SHORTCUTS.iter().map(|&(key, icon_name)| {
                    let title = title_for_tab(key).unwrap_or(key);
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctx.open_tab(key, title)
                        >
                            {icon(icon_name)}
                            " "
                            {title}
                        </Button>
                    }
                }).collect_view()}
            </Flex>
        </div>
    }
}
