use serde::{Deserialize, Serialize};

pub mod redirect;
pub mod session;

pub use redirect::{exchange_central_token, RedirectOutcome, RedirectParams, RedirectTarget};
pub use session::{Session, SessionError, SessionStore, SessionToken, SESSION_TOKEN_KEY};

/// Запрос обмена токена на центральном сервере входа
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CentralLoginRequest {
    pub app: String,
    pub token: String,
}

/// Ответ центрального сервера: токен строкой JSON или объектом `{"token": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CentralLoginResponse {
    Bare(String),
    Wrapped { token: String },
}

impl CentralLoginResponse {
    pub fn into_token(self) -> String {
        match self {
            CentralLoginResponse::Bare(token) => token,
            CentralLoginResponse::Wrapped { token } => token,
        }
    }
}
