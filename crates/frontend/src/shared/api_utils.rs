//! API utilities for frontend-backend communication
//!
//! Provides the browser HTTP transport and typed collection clients
//! bound to the resolved console configuration.

use async_trait::async_trait;
use contracts::domain::common::CollectionResource;
use contracts::shared::api::{ApiError, ApiRequest, ApiResponse, CollectionClient, HttpTransport, Method};
use contracts::shared::config::{load_config, ConsoleConfig, EnvOverrides};
use gloo_net::http::{Request, RequestBuilder};
use once_cell::sync::Lazy;

static CONFIG: Lazy<ConsoleConfig> = Lazy::new(|| {
    match load_config(EnvOverrides::from_build_env()) {
        Ok(config) => {
            log::debug!(
                "Console config: assets={}, personnel={}",
                config.api.assets_base,
                config.api.personnel_base
            );
            config
        }
        Err(e) => {
            log::warn!("Failed to load console config, using built-in addresses: {:#}", e);
            ConsoleConfig::default()
        }
    }
});

/// Resolved configuration (embedded defaults + build-time overrides)
pub fn app_config() -> &'static ConsoleConfig {
    &CONFIG
}

/// Transport over `fetch` (gloo-net)
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn builder(request: &ApiRequest) -> RequestBuilder {
    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    let builder = builder.header("Accept", "application/json");
    match request.authorization_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = builder(&request);
        let prepared = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}

/// Typed client for the collection `R`, with the session token if present
pub fn collection_client<R: CollectionResource>(
    bearer: Option<String>,
) -> CollectionClient<R, GlooTransport> {
    CollectionClient::from_config(&app_config().api, GlooTransport).with_bearer(bearer)
}
