use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// HTTP-запрос к API; тело уже сериализовано в JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    /// Токен для заголовка `Authorization: Bearer ...`
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn post_json<T: serde::Serialize>(url: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Self::new(Method::Post, url).with_json(body)
    }

    pub fn put_json<T: serde::Serialize>(url: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Self::new(Method::Put, url).with_json(body)
    }

    pub fn with_json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(json);
        Ok(self)
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {}", token))
    }
}

/// Ответ сервера: код и текст тела
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Ответ с кодом вне 2xx превращается в `ApiError::Status`
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.ok() {
            return Ok(self);
        }
        let message = self.error_message();
        Err(ApiError::Status {
            status: self.status,
            message,
        })
    }

    /// Сообщение об ошибке из тела `{"message": ...}`, иначе код ответа
    pub fn error_message(&self) -> String {
        serde_json::from_str::<ErrorBody>(&self.body)
            .map(|b| b.message)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {}", self.status))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Отправка HTTP-запросов. В браузере реализуется через `gloo-net`,
/// в тестах через коллекции в памяти.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_body_message() {
        let response = ApiResponse::new(404, r#"{"message":"Activo no encontrado"}"#);
        assert_eq!(
            response.into_result(),
            Err(ApiError::Status {
                status: 404,
                message: "Activo no encontrado".to_string()
            })
        );
        assert_eq!(ApiResponse::new(502, "<html>").error_message(), "HTTP 502");
    }

    #[test]
    fn test_bearer_header() {
        let request = ApiRequest::get("http://x/asset/").with_bearer(Some("abc".into()));
        assert_eq!(request.authorization_header().as_deref(), Some("Bearer abc"));
        assert_eq!(ApiRequest::get("http://x/asset/").authorization_header(), None);
    }
}
