use crate::domain::response::product::ProductResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCatalogService = Arc<dyn CatalogServiceTrait + Send + Sync>;

#[async_trait]
pub trait CatalogServiceTrait {
    async fn list_products(&self) -> Result<Vec<ProductResponse>, ServiceError>;
}
