use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One cart line. Request-scoped only; never persisted. Quantity has no
/// sign/bounds validation and defaults to 1 when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}
