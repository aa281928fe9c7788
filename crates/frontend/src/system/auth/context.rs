use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage::LocalSessionStore;

/// Сессия в контексте приложения; единственный источник токена для запросов
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    /// Восстановить сессию из localStorage
    pub fn restore() -> Self {
        Self {
            session: RwSignal::new(Session::restore(&LocalSessionStore)),
        }
    }

    pub fn set(&self, session: Session) {
        self.session.set(session);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Токен для заголовка Authorization, без подписки на изменения
    pub fn bearer_untracked(&self) -> Option<String> {
        self.session.with_untracked(Session::bearer)
    }

    pub fn logout(&self) {
        log::info!("Session closed by user");
        self.session.set(Session::end(&LocalSessionStore));
    }

    /// Сервер отклонил токен: сессия закрывается, приложение просит войти заново
    pub fn expire(&self) {
        log::warn!("Session token rejected by the server");
        self.session.set(Session::end(&LocalSessionStore));
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found")
}
