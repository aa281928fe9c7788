use crate::shared::api_utils::{app_config, GlooTransport};
use crate::system::auth::context::use_session;
use crate::system::auth::storage::LocalSessionStore;
use contracts::system::auth::{exchange_central_token, RedirectParams, RedirectTarget};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::window;

/// Убрать `?id=..&token=..` из адресной строки, чтобы токен не остался в истории
fn strip_query_from_url() {
    let Some(w) = window() else { return };
    let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = w.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)) {
            log::warn!("Failed to strip login params from URL: {:?}", e);
        }
    }
}

fn go_to_central_login() {
    let target = &app_config().auth.central_login_page;
    if let Some(w) = window() {
        if w.location().set_href(target).is_err() {
            log::error!("Failed to navigate to {}", target);
        }
    }
}

/// Страница входа по ссылке центрального сервера.
///
/// Обменивает `token` из ссылки на токен сессии (одна попытка) и либо
/// открывает консоль, либо отправляет пользователя на страницу входа.
#[component]
pub fn RedirectPage(query: String, on_done: Callback<()>) -> impl IntoView {
    let session = use_session();
    let params = RedirectParams::from_query(&query);

    spawn_local(async move {
        let outcome = exchange_central_token(
            &GlooTransport,
            &app_config().auth,
            &LocalSessionStore,
            params,
        )
        .await;

        if let Some(message) = &outcome.alert {
            if let Some(w) = window() {
                if let Err(e) = w.alert_with_message(message) {
                    log::warn!("Failed to show login alert: {:?}", e);
                }
            }
        }

        match outcome.target {
            RedirectTarget::Home => {
                session.set(outcome.session);
                strip_query_from_url();
                on_done.run(());
            }
            RedirectTarget::CentralLogin => go_to_central_login(),
        }
    });

    view! {
        <div class="login-container">
            <div class="login-box">
                <Flex vertical=true gap=FlexGap::Medium align=FlexAlign::Center>
                    <Spinner />
                    <span>"Iniciando sesión..."</span>
                </Flex>
            </div>
        </div>
    }
}
