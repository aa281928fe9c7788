//! REST API в памяти для тестов клиента, форм и входа через центральный сервер

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ApiError, ApiRequest, ApiResponse, HttpTransport, Method};

pub const TEST_ASSETS_BASE: &str = "http://assets.test/api/";
pub const TEST_PERSONNEL_BASE: &str = "http://personnel.test/api/";

#[derive(Default)]
pub struct MemoryApi {
    collections: RefCell<BTreeMap<String, Vec<Value>>>,
    requests: RefCell<Vec<ApiRequest>>,
    canned: RefCell<Vec<(String, ApiResponse)>>,
    failure: RefCell<Option<ApiResponse>>,
    next_id: Cell<u64>,
}

impl MemoryApi {
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.collections
            .borrow_mut()
            .insert(collection.to_string(), records);
    }

    /// Следующий запрос завершится этим ответом
    pub fn fail_next(&self, status: u16, body: &str) {
        *self.failure.borrow_mut() = Some(ApiResponse::new(status, body));
    }

    /// Фиксированный ответ для URL (для адресов вне коллекций)
    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.canned
            .borrow_mut()
            .push((url.to_string(), ApiResponse::new(status, body)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    fn not_found() -> ApiResponse {
        ApiResponse::new(404, json!({"message": "Not found"}).to_string())
    }

    fn split_path(url: &str) -> Option<(String, Option<String>)> {
        let path = url
            .strip_prefix(TEST_ASSETS_BASE)
            .or_else(|| url.strip_prefix(TEST_PERSONNEL_BASE))?;
        let mut parts = path.splitn(2, '/');
        let collection = parts.next()?.to_string();
        let id = parts
            .next()
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::decode(s).map(|d| d.into_owned()).unwrap_or_else(|_| s.to_string()));
        Some((collection, id))
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let Some((collection, id)) = Self::split_path(&request.url) else {
            return Self::not_found();
        };
        let mut collections = self.collections.borrow_mut();
        let records = collections.entry(collection).or_default();
        let position = |id: &str| records.iter().position(|r| r["_id"] == Value::from(id));

        match (request.method, id) {
            (Method::Get, None) => ApiResponse::new(200, Value::Array(records.clone()).to_string()),
            (Method::Get, Some(id)) => match position(&id) {
                Some(i) => ApiResponse::new(200, records[i].to_string()),
                None => Self::not_found(),
            },
            (Method::Post, None) => {
                let mut record: Value = match request.body.as_deref().map(serde_json::from_str) {
                    Some(Ok(value)) => value,
                    _ => return ApiResponse::new(400, json!({"message": "Invalid body"}).to_string()),
                };
                self.next_id.set(self.next_id.get() + 1);
                record["_id"] = Value::from(format!("gen-{}", self.next_id.get()));
                records.push(record.clone());
                ApiResponse::new(201, record.to_string())
            }
            (Method::Put, Some(id)) => {
                let Some(i) = position(&id) else {
                    return Self::not_found();
                };
                let mut record: Value = match request.body.as_deref().map(serde_json::from_str) {
                    Some(Ok(value)) => value,
                    _ => return ApiResponse::new(400, json!({"message": "Invalid body"}).to_string()),
                };
                record["_id"] = Value::from(id);
                records[i] = record.clone();
                ApiResponse::new(200, record.to_string())
            }
            (Method::Delete, Some(id)) => match position(&id) {
                Some(i) => {
                    records.remove(i);
                    ApiResponse::new(200, json!({"message": "Deleted"}).to_string())
                }
                None => Self::not_found(),
            },
            _ => ApiResponse::new(405, json!({"message": "Method not allowed"}).to_string()),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for MemoryApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(response) = self.failure.borrow_mut().take() {
            return Ok(response);
        }
        if let Some((_, response)) = self.canned.borrow().iter().find(|(url, _)| *url == request.url) {
            return Ok(response.clone());
        }
        Ok(self.handle(&request))
    }
}
