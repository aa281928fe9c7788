use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ключ хранилища браузера, под которым лежит токен сессии
pub const SESSION_TOKEN_KEY: &str = "token";

/// Токен сессии центрального сервера входа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Пустые значения и строковые `null`/`undefined` токеном не считаются
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().trim_matches('"').trim();
        if value.is_empty() || value == "null" || value == "undefined" {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No hay una sesión activa")]
    Missing,
}

/// Хранилище токена между перезагрузками страницы
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Сессия пользователя
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(SessionToken),
}

impl Session {
    /// Восстановить сессию из хранилища
    pub fn restore<S: SessionStore + ?Sized>(store: &S) -> Self {
        store
            .load()
            .as_deref()
            .and_then(SessionToken::parse)
            .map(Session::Authenticated)
            .unwrap_or_default()
    }

    /// Сохранить токен и открыть сессию
    pub fn establish<S: SessionStore + ?Sized>(store: &S, token: SessionToken) -> Self {
        store.save(token.as_str());
        Session::Authenticated(token)
    }

    /// Выход: очистить хранилище
    pub fn end<S: SessionStore + ?Sized>(store: &S) -> Self {
        store.clear();
        Session::Anonymous
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            Session::Authenticated(token) => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn require_token(&self) -> Result<&SessionToken, SessionError> {
        self.token().ok_or(SessionError::Missing)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Токен для заголовка `Authorization`
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| t.as_str().to_string())
    }
}
