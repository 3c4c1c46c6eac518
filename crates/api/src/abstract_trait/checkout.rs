use crate::domain::{requests::checkout::CartItem, response::checkout::CheckoutResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCheckoutService = Arc<dyn CheckoutServiceTrait + Send + Sync>;

#[async_trait]
pub trait CheckoutServiceTrait {
    async fn checkout(&self, items: &[CartItem]) -> Result<CheckoutResponse, ServiceError>;
}
