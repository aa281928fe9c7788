use contracts::system::auth::{SessionStore, SESSION_TOKEN_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Токен сессии в localStorage под ключом `token`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<String> {
        get_local_storage()?.get_item(SESSION_TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(SESSION_TOKEN_KEY, token).is_err() {
                log::warn!("Failed to persist session token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(SESSION_TOKEN_KEY).is_err() {
                log::warn!("Failed to remove session token");
            }
        }
    }
}
