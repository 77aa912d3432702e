use crate::app::tableware_service::TablewareService;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TablewareService>,
}

impl AppState {
    pub fn new(service: TablewareService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Envelope for health and error responses. Record endpoints return bare records.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct TypeQuery {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize, Debug)]
pub struct NameMaterialQuery {
    pub name: String,
    pub material: String,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}

pub fn internal_500(err: &anyhow::Error) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(format!("{:#}", err))),
    )
}

/// Shape of a tableware body, quoted in 422 responses.
pub const TABLEWARE_SHAPE: &str =
    "{\"name\": str, \"material\": str, \"type\": str, \"price\": number, \"volume\": int}";
