use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::common::ApiHost;

/// Конфигурация консоли
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

/// Базовые адреса REST API
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Активы, поставщики, группы контабельные
    pub assets_base: String,
    /// Персонал
    pub personnel_base: String,
}

impl ApiConfig {
    pub fn base_for(&self, host: ApiHost) -> &str {
        match host {
            ApiHost::Assets => &self.assets_base,
            ApiHost::Personnel => &self.personnel_base,
        }
    }
}

/// Центральный сервер входа
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Обмен токена из ссылки на токен сессии
    pub central_login_api: String,
    /// Страница входа, куда уходит пользователь без сессии
    pub central_login_page: String,
}

impl Default for ConsoleConfig {
    /// Адреса встроенной конфигурации без разбора TOML
    fn default() -> Self {
        Self {
            api: ApiConfig {
                assets_base: "http://127.0.0.1:8080/".to_string(),
                personnel_base: "http://127.0.0.1:3300/api/".to_string(),
            },
            auth: AuthConfig {
                central_login_api: "http://127.0.0.1:3300/api/central/login-central".to_string(),
                central_login_page: "http://127.0.0.1:3000/login".to_string(),
            },
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[api]
assets_base = "http://127.0.0.1:8080/"
personnel_base = "http://127.0.0.1:3300/api/"

[auth]
central_login_api = "http://127.0.0.1:3300/api/central/login-central"
central_login_page = "http://127.0.0.1:3000/login"
"#;

/// Переопределения адресов, заданные при сборке
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvOverrides {
    pub api_activos: Option<&'static str>,
    pub api_personal: Option<&'static str>,
    pub url_api_central: Option<&'static str>,
    pub url_central: Option<&'static str>,
}

impl EnvOverrides {
    /// Значения переменных `ASSET_CONSOLE_*` на момент компиляции
    pub fn from_build_env() -> Self {
        Self {
            api_activos: option_env!("ASSET_CONSOLE_API_ACTIVOS"),
            api_personal: option_env!("ASSET_CONSOLE_API_PERSONAL"),
            url_api_central: option_env!("ASSET_CONSOLE_URL_API_CENTRAL"),
            url_central: option_env!("ASSET_CONSOLE_URL_CENTRAL"),
        }
    }
}

/// Базовый адрес всегда заканчивается на `/`
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

fn apply(target: &mut String, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        *target = value.to_string();
    }
}

impl ConsoleConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: ConsoleConfig =
            toml::from_str(content).context("Failed to parse console config")?;
        config.normalize();
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: EnvOverrides) -> Self {
        apply(&mut self.api.assets_base, overrides.api_activos);
        apply(&mut self.api.personnel_base, overrides.api_personal);
        apply(&mut self.auth.central_login_api, overrides.url_api_central);
        apply(&mut self.auth.central_login_page, overrides.url_central);
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        self.api.assets_base = normalize_base_url(&self.api.assets_base);
        self.api.personnel_base = normalize_base_url(&self.api.personnel_base);
    }
}

/// Встроенная конфигурация с переопределениями
pub fn load_config(overrides: EnvOverrides) -> Result<ConsoleConfig> {
    Ok(ConsoleConfig::from_toml(DEFAULT_CONFIG)?.with_overrides(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(EnvOverrides::default()).unwrap();
        assert_eq!(config.api.assets_base, "http://127.0.0.1:8080/");
        assert_eq!(config.api.base_for(ApiHost::Personnel), "http://127.0.0.1:3300/api/");
    }

    #[test]
    fn test_builtin_default_matches_embedded_toml() {
        let config = load_config(EnvOverrides::default()).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_overrides_are_normalized() {
        let overrides = EnvOverrides {
            api_activos: Some("https://activos.example.org/api"),
            url_central: Some("https://central.example.org/login"),
            api_personal: Some("   "),
            ..EnvOverrides::default()
        };
        let config = load_config(overrides).unwrap();
        assert_eq!(config.api.assets_base, "https://activos.example.org/api/");
        assert_eq!(config.api.personnel_base, "http://127.0.0.1:3300/api/");
        assert_eq!(config.auth.central_login_page, "https://central.example.org/login");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let err = ConsoleConfig::from_toml("[api]\nassets_base = \"x\"\npersonnel_base = \"y\"\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse console config"));
    }
}
