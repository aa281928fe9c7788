//! Типизированный доступ к REST-коллекциям внешнего API

pub mod client;
pub mod error;
pub mod transport;

#[cfg(test)]
pub(crate) mod memory;

pub use client::CollectionClient;
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};
