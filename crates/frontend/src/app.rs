use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Session restored from localStorage; the redirect page replaces it after a token exchange
    provide_context(SessionContext::restore());

    view! {
        <AppShell />
    }
}
