//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - gate: страница входа по ссылке, экран "нужна сессия" или MainLayout
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + Tabs)

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::{TabBar, TabPage};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::redirect::RedirectPage;
use crate::system::pages::session_required::SessionRequired;
use contracts::shared::navigation::{title_for_tab, HOME_TAB};
use contracts::system::auth::RedirectParams;
use leptos::logging::log;
use leptos::prelude::*;

/// Main application layout с Sidebar и Tabs.
///
/// Инициализирует router integration для синхронизации табов с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab(HOME_TAB, title_for_tab(HOME_TAB).unwrap_or(HOME_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("<For> children function called for: '{}'", tab.key);
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
    }
}

/// Application shell - session gate component.
///
/// Показывает:
/// - `RedirectPage` если страница открыта по ссылке центрального входа (`?id=..&token=..`)
/// - `SessionRequired` если сессии нет
/// - `MainLayout` если сессия есть
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let redirect_pending = RwSignal::new(RedirectParams::is_redirect_query(&query));
    let query = StoredValue::new(query);

    view! {
        <Show
            when=move || !redirect_pending.get()
            fallback=move || view! {
                <RedirectPage
                    query=query.get_value()
                    on_done=Callback::new(move |_| redirect_pending.set(false))
                />
            }
        >
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! { <SessionRequired /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
