use crate::domain::Tableware;
use crate::transport::http::types::{AppState, NameMaterialQuery, TypeQuery};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/tableware/search",
    params(
        ("type" = String, Query, description = "Exact, case-sensitive type to match")
    ),
    responses(
        (status = 200, description = "Matching tableware (possibly empty)", body = Vec<Tableware>),
        (status = 400, description = "Missing `type` parameter")
    )
)]
pub async fn search_by_type_handler(
    State(state): State<AppState>,
    Query(query): Query<TypeQuery>,
) -> impl IntoResponse {
    Json(state.service.search_by_type(&query.kind).await)
}

#[utoipa::path(
    post,
    path = "/api/tableware/search",
    params(
        ("name" = String, Query, description = "Exact name"),
        ("material" = String, Query, description = "Exact material")
    ),
    responses(
        (status = 200, description = "Whether a tableware with this name and material exists", body = bool),
        (status = 400, description = "Missing `name` or `material` parameter")
    )
)]
pub async fn exists_by_name_and_material_handler(
    State(state): State<AppState>,
    Query(query): Query<NameMaterialQuery>,
) -> impl IntoResponse {
    Json(
        state
            .service
            .is_exist_by_name_and_material(&query.name, &query.material)
            .await,
    )
}
