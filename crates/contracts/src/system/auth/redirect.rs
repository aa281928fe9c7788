use serde::Deserialize;

use super::session::{Session, SessionStore, SessionToken};
use super::{CentralLoginRequest, CentralLoginResponse};
use crate::shared::api::{ApiError, ApiRequest, HttpTransport};
use crate::shared::config::AuthConfig;

#[derive(Debug, Default, Deserialize)]
struct RawParams {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    token: Option<String>,
}

impl RawParams {
    fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        serde_qs::from_str(query).unwrap_or_else(|e| {
            log::warn!("Failed to parse redirect query: {}", e);
            RawParams::default()
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Параметры ссылки с центрального сервера: `?id=<app>&token=<token>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectParams {
    pub app: String,
    pub token: String,
}

impl RedirectParams {
    /// Оба параметра обязательны
    pub fn from_query(query: &str) -> Option<Self> {
        let raw = RawParams::parse(query);
        Some(Self {
            app: non_empty(raw.id)?,
            token: non_empty(raw.token)?,
        })
    }

    /// Страница открыта по ссылке входа (есть хотя бы один из параметров)
    pub fn is_redirect_query(query: &str) -> bool {
        let raw = RawParams::parse(query);
        raw.id.is_some() || raw.token.is_some()
    }
}

/// Куда перейти после обмена токена
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Home,
    CentralLogin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectOutcome {
    pub target: RedirectTarget,
    pub session: Session,
    /// Сообщение для блокирующего alert перед переходом
    pub alert: Option<String>,
}

impl RedirectOutcome {
    fn home(session: Session) -> Self {
        Self {
            target: RedirectTarget::Home,
            session,
            alert: None,
        }
    }

    fn login(alert: Option<String>) -> Self {
        Self {
            target: RedirectTarget::CentralLogin,
            session: Session::Anonymous,
            alert,
        }
    }
}

/// Токен из тела ответа: строка JSON, `{"token": ...}` или просто текст.
/// Любой другой JSON токена не содержит.
pub fn extract_session_token(body: &str) -> Option<SessionToken> {
    match serde_json::from_str::<CentralLoginResponse>(body) {
        Ok(response) => SessionToken::parse(&response.into_token()),
        Err(_) if serde_json::from_str::<serde_json::Value>(body).is_ok() => None,
        Err(_) => SessionToken::parse(body),
    }
}

/// Обменять токен из ссылки на токен сессии. Одна попытка, без повторов.
pub async fn exchange_central_token<T, S>(
    transport: &T,
    auth: &AuthConfig,
    store: &S,
    params: Option<RedirectParams>,
) -> RedirectOutcome
where
    T: HttpTransport + ?Sized,
    S: SessionStore + ?Sized,
{
    let Some(params) = params else {
        log::info!("Redirect without id/token, sending user to central login");
        return RedirectOutcome::login(None);
    };

    let body = CentralLoginRequest {
        app: params.app,
        token: params.token,
    };
    let response = match ApiRequest::post_json(auth.central_login_api.clone(), &body) {
        Ok(request) => transport.send(request).await.and_then(|r| r.into_result()),
        Err(e) => Err(e),
    };

    match response {
        Ok(response) => match extract_session_token(&response.body) {
            Some(token) => {
                log::info!("Session established for app {}", body.app);
                RedirectOutcome::home(Session::establish(store, token))
            }
            None => {
                log::warn!("Central login returned no token");
                RedirectOutcome::login(None)
            }
        },
        Err(e) => {
            log::error!("Central login failed: {}", e);
            let message = match &e {
                ApiError::Status { message, .. } => message.clone(),
                other => other.to_string(),
            };
            RedirectOutcome::login(Some(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::memory::MemoryApi;
    use crate::system::auth::session::MemorySessionStore;

    const CENTRAL: &str = "http://central.test/api/central/login-central";

    fn auth() -> AuthConfig {
        AuthConfig {
            central_login_api: CENTRAL.to_string(),
            central_login_page: "http://central.test/login".to_string(),
        }
    }

    #[test]
    fn test_params_require_both_values() {
        assert_eq!(
            RedirectParams::from_query("?id=activos&token=abc"),
            Some(RedirectParams {
                app: "activos".to_string(),
                token: "abc".to_string()
            })
        );
        assert_eq!(RedirectParams::from_query("?id=activos"), None);
        assert_eq!(RedirectParams::from_query("?id=&token=abc"), None);
        assert!(RedirectParams::is_redirect_query("?token=abc"));
        assert!(!RedirectParams::is_redirect_query(""));
    }

    #[test]
    fn test_extract_token_shapes() {
        assert_eq!(extract_session_token("\"jwt-1\"").unwrap().as_str(), "jwt-1");
        assert_eq!(extract_session_token(r#"{"token":"jwt-2"}"#).unwrap().as_str(), "jwt-2");
        assert_eq!(extract_session_token("jwt-3").unwrap().as_str(), "jwt-3");
        assert_eq!(extract_session_token(""), None);
        assert_eq!(extract_session_token(r#"{"message":"ok"}"#), None);
        assert_eq!(extract_session_token("null"), None);
    }

    #[tokio::test]
    async fn test_missing_params_go_to_login_without_request() {
        let api = MemoryApi::default();
        let store = MemorySessionStore::default();
        let outcome = exchange_central_token(&api, &auth(), &store, None).await;
        assert_eq!(outcome.target, RedirectTarget::CentralLogin);
        assert_eq!(outcome.alert, None);
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_successful_exchange_stores_token() {
        let api = MemoryApi::default();
        api.respond(CENTRAL, 200, "\"jwt-xyz\"");
        let store = MemorySessionStore::default();
        let params = RedirectParams::from_query("id=activos&token=one-time");
        let outcome = exchange_central_token(&api, &auth(), &store, params).await;

        assert_eq!(outcome.target, RedirectTarget::Home);
        assert!(outcome.session.is_authenticated());
        assert_eq!(store.load().as_deref(), Some("jwt-xyz"));

        let sent = &api.requests()[0];
        let body: CentralLoginRequest = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body.app, "activos");
        assert_eq!(body.token, "one-time");
    }

    #[tokio::test]
    async fn test_rejected_exchange_alerts_server_message() {
        let api = MemoryApi::default();
        api.respond(CENTRAL, 401, r#"{"message":"Token expirado"}"#);
        let store = MemorySessionStore::default();
        let params = RedirectParams::from_query("id=activos&token=old");
        let outcome = exchange_central_token(&api, &auth(), &store, params).await;

        assert_eq!(outcome.target, RedirectTarget::CentralLogin);
        assert_eq!(outcome.alert.as_deref(), Some("Token expirado"));
        assert_eq!(outcome.session, Session::Anonymous);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_json_without_token_goes_to_login() {
        let api = MemoryApi::default();
        api.respond(CENTRAL, 200, r#"{"message":"ok"}"#);
        let store = MemorySessionStore::default();
        let params = RedirectParams::from_query("id=activos&token=t");
        let outcome = exchange_central_token(&api, &auth(), &store, params).await;
        assert_eq!(outcome.target, RedirectTarget::CentralLogin);
        assert_eq!(outcome.session, Session::Anonymous);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_empty_token_goes_to_login() {
        let api = MemoryApi::default();
        api.respond(CENTRAL, 200, r#"{"token":""}"#);
        let store = MemorySessionStore::default();
        let params = RedirectParams::from_query("id=activos&token=t");
        let outcome = exchange_central_token(&api, &auth(), &store, params).await;
        assert_eq!(outcome.target, RedirectTarget::CentralLogin);
        assert_eq!(outcome.alert, None);
    }
}
