use crate::{
    abstract_trait::checkout::DynCheckoutService,
    domain::{requests::checkout::CartItem, response::checkout::CheckoutResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/checkout",
    tag = "Checkout",
    request_body = Vec<CartItem>,
    responses(
        (status = 200, description = "Checkout total", body = CheckoutResponse),
        (status = 400, description = "Empty cart or invalid product id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn checkout(
    Extension(service): Extension<DynCheckoutService>,
    Json(items): Json<Vec<CartItem>>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.checkout(&items).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn checkout_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/checkout", post(checkout))
        .layer(Extension(app_state.di_container.checkout.clone()))
}
