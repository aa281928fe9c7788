use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs__bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <TabHandle tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}

#[component]
fn TabHandle(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str())));

    let on_click = move |_| key.with_value(|k| tabs_store.activate_tab(k));
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div class="tabs__handle" class:tabs__handle--active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tabs__close" title="Cerrar" on:click=on_close>
                {icon("close")}
            </button>
        </div>
    }
}
