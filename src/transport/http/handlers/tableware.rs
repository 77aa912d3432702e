use crate::domain::{Lookup, Tableware};
use crate::transport::http::types::{internal_500, json_422, ApiResponse, AppState, TABLEWARE_SHAPE};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/tableware",
    responses(
        (status = 200, description = "All tableware, in id order", body = Vec<Tableware>)
    )
)]
pub async fn list_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.get_all().await)
}

#[utoipa::path(
    get,
    path = "/api/tableware/{id}",
    params(
        ("id" = i32, Path, description = "Tableware id")
    ),
    responses(
        (status = 200, description = "Tableware found", body = Tableware),
        (status = 404, description = "No tableware with this id")
    )
)]
pub async fn get_handler(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.service.get_by_id(id).await {
        Lookup::Found(t) => (StatusCode::OK, Json(t)).into_response(),
        Lookup::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/tableware",
    request_body = Tableware,
    responses(
        (status = 200, description = "Tableware created; body carries the assigned id", body = Tableware),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_handler(
    State(state): State<AppState>,
    request: Result<Json<Tableware>, JsonRejection>,
) -> impl IntoResponse {
    let Json(record) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, TABLEWARE_SHAPE).into_response(),
    };

    match state.service.add(record).await {
        Ok(stored) => {
            tracing::info!(id = stored.id, "created tableware");
            (StatusCode::OK, Json(stored)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create tableware");
            internal_500(&e).into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/tableware/{id}",
    params(
        ("id" = i32, Path, description = "Tableware id")
    ),
    request_body = Tableware,
    responses(
        (status = 200, description = "Tableware replaced", body = Tableware),
        (status = 404, description = "No tableware with this id"),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Result<Json<Tableware>, JsonRejection>,
) -> impl IntoResponse {
    let Json(record) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, TABLEWARE_SHAPE).into_response(),
    };

    match state.service.update(id, record).await {
        Ok(Lookup::Found(stored)) => {
            tracing::info!(id, "updated tableware");
            (StatusCode::OK, Json(stored)).into_response()
        }
        Ok(Lookup::NotFound) => {
            tracing::warn!(id, "attempted to update non-existing tableware");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(id, error = %e, "failed to update tableware");
            internal_500(&e).into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/tableware/{id}",
    params(
        ("id" = i32, Path, description = "Tableware id")
    ),
    responses(
        (status = 204, description = "Tableware deleted"),
        (status = 404, description = "No tableware with this id"),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_handler(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    tracing::info!(id, "attempting to delete tableware");
    match state.service.delete(id).await {
        Ok(Lookup::Found(_)) => StatusCode::NO_CONTENT.into_response(),
        Ok(Lookup::NotFound) => {
            tracing::error!(id, "attempted to delete non-existing tableware");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(id, error = %e, "failed to delete tableware");
            internal_500(&e).into_response()
        }
    }
}
