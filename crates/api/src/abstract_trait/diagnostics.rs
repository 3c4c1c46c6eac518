use crate::domain::response::diagnostics::DiagnosticsReport;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDiagnosticsService = Arc<dyn DiagnosticsServiceTrait + Send + Sync>;

#[async_trait]
pub trait DiagnosticsServiceTrait {
    /// Best-effort status report. Never fails; backend errors degrade the
    /// affected field instead.
    async fn test_database(&self) -> DiagnosticsReport;
}
