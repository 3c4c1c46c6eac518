use crate::{
    abstract_trait::diagnostics::DynDiagnosticsService,
    domain::response::diagnostics::DiagnosticsReport, state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Store connectivity report", body = DiagnosticsReport)
    )
)]
pub async fn test_database(
    Extension(service): Extension<DynDiagnosticsService>,
) -> impl IntoResponse {
    let report = service.test_database().await;
    (StatusCode::OK, Json(report))
}

pub fn diagnostics_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/test", get(test_database))
        .layer(Extension(app_state.di_container.diagnostics.clone()))
}
