mod checkout;
mod diagnostics;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::{Json, Router, extract::DefaultBodyLimit, response::IntoResponse, routing::get};
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::checkout::checkout_routes;
pub use self::diagnostics::diagnostics_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        read_root,
        product::list_products,
        checkout::checkout,
        diagnostics::test_database,
    ),
    tags(
        (name = "Product", description = "Product catalog endpoints"),
        (name = "Checkout", description = "Checkout endpoints"),
        (name = "Diagnostics", description = "Operational diagnostics endpoints"),
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Liveness message", body = serde_json::Value)
    )
)]
pub async fn read_root() -> impl IntoResponse {
    Json(json!({"message": "Pet Pantry Backend is running"}))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: Arc<AppState>) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(read_root))
            .merge(product_routes(app_state.clone()))
            .merge(checkout_routes(app_state.clone()))
            .merge(diagnostics_routes(app_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            // Open by design: all origins, methods and headers, with
            // credentials. Not suitable for production as-is.
            .layer(CorsLayer::very_permissive())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
