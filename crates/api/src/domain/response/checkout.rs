use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a checkout. No order record is created; the total is computed
/// server-side from stored prices and rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponse {
    pub status: String,
    pub total: f64,
}
