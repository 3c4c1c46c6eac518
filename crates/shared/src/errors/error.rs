use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape for every error status: `{"detail": "<message>"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
