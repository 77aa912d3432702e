//! HTTP client for the tableware API.
//!
//! Every operation is a single request/response round trip. Instead of failing on any
//! non-2xx status, each call returns an [`Outcome`] that separates the expected miss (404)
//! from real failures, so callers decide what to absorb and what to propagate.

pub mod demo;

use crate::domain::Tableware;
use crate::transport::http::API_BASE;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The outgoing body could not be serialized; nothing was sent.
    #[error("Failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

/// A successful (2xx) response.
#[derive(Debug)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: T,
}

/// Details of a 404 answer.
#[derive(Debug)]
pub struct NotFound {
    pub status: StatusCode,
    pub url: String,
    pub body: String,
}

#[derive(Debug)]
pub enum Outcome<T> {
    Ok(Reply<T>),
    NotFound(NotFound),
    Failed(ClientError),
}

impl<T> Outcome<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound(_))
    }

    /// `Ok(Some(reply))` on success, `Ok(None)` on 404, `Err` on any failure.
    pub fn into_result(self) -> Result<Option<Reply<T>>, ClientError> {
        match self {
            Outcome::Ok(reply) => Ok(Some(reply)),
            Outcome::NotFound(_) => Ok(None),
            Outcome::Failed(e) => Err(e),
        }
    }
}

#[derive(Clone)]
pub struct TablewareClient {
    http: reqwest::Client,
    base_url: String,
}

impl TablewareClient {
    /// `base_url` is the server root, e.g. `http://localhost:8090`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, API_BASE)
    }

    fn item_url(&self, id: i32) -> String {
        format!("{}{}/{}", self.base_url, API_BASE, id)
    }

    fn search_url(&self) -> String {
        format!("{}{}/search", self.base_url, API_BASE)
    }

    pub async fn list(&self) -> Outcome<Vec<Tableware>> {
        self.send(self.http.get(self.collection_url()), decode_json).await
    }

    pub async fn get(&self, id: i32) -> Outcome<Tableware> {
        self.send(self.http.get(self.item_url(id)), decode_json).await
    }

    pub async fn create(&self, record: &impl Serialize) -> Outcome<Tableware> {
        let body = match serde_json::to_vec(record) {
            Ok(b) => b,
            Err(e) => return Outcome::Failed(ClientError::Encode(e)),
        };
        let request = self
            .http
            .post(self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request, decode_json).await
    }

    pub async fn update(&self, id: i32, record: &impl Serialize) -> Outcome<Tableware> {
        let body = match serde_json::to_vec(record) {
            Ok(b) => b,
            Err(e) => return Outcome::Failed(ClientError::Encode(e)),
        };
        let request = self
            .http
            .put(self.item_url(id))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request, decode_json).await
    }

    pub async fn delete(&self, id: i32) -> Outcome<()> {
        self.send(self.http.delete(self.item_url(id)), |_| Ok(())).await
    }

    pub async fn search_by_type(&self, kind: &str) -> Outcome<Vec<Tableware>> {
        let request = self.http.get(self.search_url()).query(&[("type", kind)]);
        self.send(request, decode_json).await
    }

    pub async fn exists_by_name_and_material(&self, name: &str, material: &str) -> Outcome<bool> {
        let request = self
            .http
            .post(self.search_url())
            .query(&[("name", name), ("material", material)]);
        self.send(request, decode_json).await
    }

    async fn send<T>(
        &self,
        request: RequestBuilder,
        decode: impl FnOnce(&[u8]) -> Result<T, serde_json::Error>,
    ) -> Outcome<T> {
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return Outcome::Failed(ClientError::Transport(e)),
        };
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().to_string();
        let bytes = match response.bytes().await {
            Ok(b) => b,
            Err(e) => return Outcome::Failed(ClientError::Transport(e)),
        };
        tracing::debug!(%status, %url, len = bytes.len(), "tableware API response");

        if status == StatusCode::NOT_FOUND {
            return Outcome::NotFound(NotFound {
                status,
                url,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        if !status.is_success() {
            return Outcome::Failed(ClientError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        match decode(&bytes[..]) {
            Ok(body) => Outcome::Ok(Reply {
                status,
                headers,
                body,
            }),
            Err(e) => Outcome::Failed(ClientError::Decode(e)),
        }
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(bytes)
}
