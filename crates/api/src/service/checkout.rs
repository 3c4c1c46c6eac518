use crate::{
    abstract_trait::{checkout::CheckoutServiceTrait, document::DynDocumentStore},
    domain::{requests::checkout::CartItem, response::checkout::CheckoutResponse},
    model::document::{DocumentFilter, coerce_f64},
    service::PRODUCT_COLLECTION,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct CheckoutService {
    store: DynDocumentStore,
}

impl CheckoutService {
    pub fn new(store: DynDocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CheckoutServiceTrait for CheckoutService {
    /// Computes the cart total from stored prices; client-sent prices are
    /// never consulted. Duplicate product ids collapse last-wins, and ids not
    /// present in the store contribute nothing to the total.
    async fn checkout(&self, items: &[CartItem]) -> Result<CheckoutResponse, ServiceError> {
        if items.is_empty() {
            return Err(ServiceError::InvalidInput("Cart is empty".to_string()));
        }

        info!("🛒 Checking out {} cart items", items.len());

        let mut id_to_qty: HashMap<String, i64> = HashMap::new();
        for item in items {
            id_to_qty.insert(item.product_id.clone(), item.quantity);
        }

        let ids = id_to_qty
            .keys()
            .map(|pid| {
                Uuid::parse_str(pid)
                    .map_err(|_| ServiceError::Repo(RepositoryError::InvalidId(pid.clone())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let documents = self
            .store
            .get_documents(PRODUCT_COLLECTION, Some(DocumentFilter::IdIn(ids)))
            .await?;

        let mut total = 0.0;
        for doc in &documents {
            let qty = id_to_qty.get(&doc.id.to_string()).copied().unwrap_or(1);
            let price = doc.data.get("price").and_then(coerce_f64).unwrap_or(0.0);
            total += price * qty as f64;
        }

        let total = (total * 100.0).round() / 100.0;

        info!("✅ Checkout total computed: {total}");

        Ok(CheckoutResponse {
            status: "success".to_string(),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryDocumentStore;
    use serde_json::json;
    use std::sync::Arc;

    fn item(id: &str, quantity: i64) -> CartItem {
        CartItem {
            product_id: id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn empty_cart_is_rejected_without_store_reads() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = CheckoutService::new(store.clone());

        let err = service.checkout(&[]).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(ref msg) if msg == "Cart is empty"));
        assert_eq!(store.read_count(), 0);
    }

    #[tokio::test]
    async fn total_is_price_times_quantity() {
        let store = Arc::new(MemoryDocumentStore::new());
        let id = store.insert(PRODUCT_COLLECTION, json!({"title": "Kibble", "price": 10.00}));

        let service = CheckoutService::new(store.clone());
        let response = service.checkout(&[item(&id.to_string(), 3)]).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.total, 30.0);
    }

    #[tokio::test]
    async fn unknown_ids_contribute_nothing() {
        let store = Arc::new(MemoryDocumentStore::new());
        let id = store.insert(PRODUCT_COLLECTION, json!({"title": "Treats", "price": 5.00}));

        let service = CheckoutService::new(store.clone());
        let response = service
            .checkout(&[
                item(&id.to_string(), 2),
                item(&Uuid::new_v4().to_string(), 7),
            ])
            .await
            .unwrap();

        assert_eq!(response.total, 10.0);
    }

    #[tokio::test]
    async fn all_unknown_ids_succeed_with_zero_total() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = CheckoutService::new(store.clone());

        let response = service
            .checkout(&[item(&Uuid::new_v4().to_string(), 4)])
            .await
            .unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.total, 0.0);
    }

    #[tokio::test]
    async fn duplicate_ids_collapse_last_wins() {
        let store = Arc::new(MemoryDocumentStore::new());
        let id = store.insert(PRODUCT_COLLECTION, json!({"title": "Kibble", "price": 2.00}));

        let service = CheckoutService::new(store.clone());
        let response = service
            .checkout(&[item(&id.to_string(), 1), item(&id.to_string(), 5)])
            .await
            .unwrap();

        assert_eq!(response.total, 10.0);
    }

    #[tokio::test]
    async fn total_is_rounded_to_two_decimals() {
        let store = Arc::new(MemoryDocumentStore::new());
        let id = store.insert(PRODUCT_COLLECTION, json!({"title": "Kibble", "price": 3.333}));

        let service = CheckoutService::new(store.clone());
        let response = service.checkout(&[item(&id.to_string(), 3)]).await.unwrap();

        assert_eq!(response.total, 10.0);
    }

    #[tokio::test]
    async fn malformed_id_is_a_store_level_error() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = CheckoutService::new(store.clone());

        let err = service.checkout(&[item("not-a-uuid", 1)]).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::InvalidId(ref id)) if id == "not-a-uuid"
        ));
    }

    #[tokio::test]
    async fn missing_price_defaults_to_zero() {
        let store = Arc::new(MemoryDocumentStore::new());
        let id = store.insert(PRODUCT_COLLECTION, json!({"title": "Mystery item"}));

        let service = CheckoutService::new(store.clone());
        let response = service.checkout(&[item(&id.to_string(), 9)]).await.unwrap();

        assert_eq!(response.total, 0.0);
    }
}
