use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Best-effort operational report. `database_url` and `database_name` carry
/// env-var presence only, never values; `store_name` is the introspected
/// database name when the store answered.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub connection_status: String,
    pub store_name: Option<String>,
    pub collections: Vec<String>,
    pub database_url: String,
    pub database_name: String,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            connection_status: "Not Connected".to_string(),
            store_name: None,
            collections: Vec::new(),
            database_url: "❌ Not Set".to_string(),
            database_name: "❌ Not Set".to_string(),
        }
    }
}
