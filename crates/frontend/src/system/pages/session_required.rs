use crate::shared::api_utils::app_config;
use leptos::prelude::*;

/// Экран для пользователя без сессии: вход только через центральный сервер
#[component]
pub fn SessionRequired() -> impl IntoView {
    let login_page = app_config().auth.central_login_page.clone();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Activos Fijos"</h1>
                <h2>"Sesión requerida"</h2>
                <p>"Ingrese desde el sistema central para continuar."</p>
                <a class="button button--primary" href=login_page>
                    "Ir al inicio de sesión"
                </a>
            </div>
        </div>
    }
}
