//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - Session indicator and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        ctx.reset();
        session.logout();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Activos Fijos"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || if session.is_authenticated() { "Sesión activa" } else { "Sin sesión" }}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
