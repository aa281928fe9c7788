use std::marker::PhantomData;

use super::{ApiError, ApiRequest, HttpTransport};
use crate::domain::common::{CollectionResource, EntityId};
use crate::shared::config::{normalize_base_url, ApiConfig};
use crate::shared::forms::{FormMode, SubmitRequest};
use crate::shared::list::active_only;

/// Клиент REST-коллекции записей типа `R`
pub struct CollectionClient<R, T> {
    base_url: String,
    transport: T,
    bearer: Option<String>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: CollectionResource, T: HttpTransport> CollectionClient<R, T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            transport,
            bearer: None,
            _marker: PhantomData,
        }
    }

    /// Клиент для сервера, который обслуживает коллекцию `R`
    pub fn from_config(config: &ApiConfig, transport: T) -> Self {
        Self::new(config.base_for(R::host()), transport)
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn list_url(&self) -> String {
        format!("{}{}", self.base_url, R::list_path())
    }

    pub fn item_url(&self, id: &EntityId) -> String {
        format!("{}{}", self.base_url, R::item_path(id))
    }

    async fn execute(&self, request: ApiRequest) -> Result<super::ApiResponse, ApiError> {
        let request = request.with_bearer(self.bearer.clone());
        log::debug!("{} {}", request.method.as_str(), request.url);
        self.transport.send(request).await?.into_result()
    }

    /// Все записи коллекции, как их отдаёт сервер
    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.execute(ApiRequest::get(self.list_url())).await?.json()
    }

    /// Записи коллекции без архивных
    pub async fn list_active(&self) -> Result<Vec<R>, ApiError> {
        Ok(active_only(self.list().await?))
    }

    pub async fn get(&self, id: &EntityId) -> Result<R, ApiError> {
        self.execute(ApiRequest::get(self.item_url(id))).await?.json()
    }

    pub async fn create(&self, record: &R) -> Result<(), ApiError> {
        let request = ApiRequest::post_json(self.list_url(), record)?;
        self.execute(request).await.map(|_| ())
    }

    pub async fn update(&self, id: &EntityId, record: &R) -> Result<(), ApiError> {
        let request = ApiRequest::put_json(self.item_url(id), record)?;
        self.execute(request).await.map(|_| ())
    }

    pub async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(self.item_url(id)))
            .await
            .map(|_| ())
    }

    /// Сохранить запись из формы: POST для новой, PUT для существующей
    pub async fn submit(&self, request: &SubmitRequest<R>) -> Result<(), ApiError> {
        match &request.mode {
            FormMode::Create => self.create(&request.record).await,
            FormMode::Edit(id) => self.update(id, &request.record).await,
        }
    }
}
