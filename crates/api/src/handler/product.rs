use crate::{
    abstract_trait::catalog::DynCatalogService, domain::response::product::ProductResponse,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_products(
    Extension(service): Extension<DynCatalogService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_products().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(list_products))
        .layer(Extension(app_state.di_container.catalog.clone()))
}
