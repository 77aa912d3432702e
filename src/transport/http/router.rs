use crate::domain::Tableware;
use crate::transport::http::handlers::{health, search, tableware};
use crate::transport::http::types::ApiResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub const API_BASE: &str = "/api/tableware";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        tableware::list_handler,
        tableware::get_handler,
        tableware::create_handler,
        tableware::update_handler,
        tableware::delete_handler,
        search::search_by_type_handler,
        search::exists_by_name_and_material_handler
    ),
    components(schemas(Tableware, ApiResponse))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            API_BASE,
            get(tableware::list_handler).post(tableware::create_handler),
        )
        .route(
            &format!("{}/search", API_BASE),
            get(search::search_by_type_handler).post(search::exists_by_name_and_material_handler),
        )
        .route(
            &format!("{}/:id", API_BASE),
            get(tableware::get_handler)
                .put(tableware::update_handler)
                .delete(tableware::delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
