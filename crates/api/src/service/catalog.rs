use crate::{
    abstract_trait::{
        catalog::CatalogServiceTrait,
        document::DynDocumentStore,
    },
    domain::response::product::ProductResponse,
    model::document::Document,
    service::PRODUCT_COLLECTION,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct CatalogService {
    store: DynDocumentStore,
}

impl CatalogService {
    pub fn new(store: DynDocumentStore) -> Self {
        Self { store }
    }

    fn decode_all(documents: &[Document]) -> Result<Vec<ProductResponse>, ServiceError> {
        documents
            .iter()
            .map(ProductResponse::from_document)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("❌ Failed to decode product document: {e}");
                ServiceError::Decode(e.to_string())
            })
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn list_products(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Listing products");

        let documents = self.store.get_documents(PRODUCT_COLLECTION, None).await?;

        if !documents.is_empty() {
            info!("✅ Found {} products", documents.len());
            return Self::decode_all(&documents);
        }

        // Empty catalog: seed the demo items, then serve the re-fetched rows.
        // The store-level guard keeps concurrent empty-catalog reads from
        // seeding twice.
        let seeded = self
            .store
            .create_documents_if_empty(PRODUCT_COLLECTION, &demo_catalog())
            .await?;

        if seeded {
            info!("🌱 Catalog was empty, demo products seeded");
        }

        let documents = self.store.get_documents(PRODUCT_COLLECTION, None).await?;

        info!("✅ Found {} products after seeding", documents.len());

        Self::decode_all(&documents)
    }
}

/// The four fixed demo products inserted when the catalog is empty.
pub fn demo_catalog() -> Vec<Value> {
    vec![
        json!({
            "title": "Premium Dry Dog Food - Chicken",
            "description": "High-protein kibble with vitamins and minerals.",
            "price": 29.99,
            "category": "Dog",
            "in_stock": true,
            "image_url": "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=800&q=80&auto=format&fit=crop",
            "rating": 4.7,
            "brand": "Pawsome",
            "weight": "5 lb",
        }),
        json!({
            "title": "Wet Cat Food - Salmon",
            "description": "Grain-free recipe with real salmon.",
            "price": 19.49,
            "category": "Cat",
            "in_stock": true,
            "image_url": "https://images.unsplash.com/photo-1596495578065-8a35f2a88f1b?w=800&q=80&auto=format&fit=crop",
            "rating": 4.6,
            "brand": "WhiskerDelight",
            "weight": "12 x 3 oz",
        }),
        json!({
            "title": "Puppy Starter Pack",
            "description": "Balanced nutrition for growing pups.",
            "price": 34.99,
            "category": "Dog",
            "in_stock": true,
            "image_url": "https://images.unsplash.com/photo-1558944351-c0a92c12f44e?w=800&q=80&auto=format&fit=crop",
            "rating": 4.8,
            "brand": "HappyTails",
            "weight": "8 lb",
        }),
        json!({
            "title": "Adult Cat Kibble - Turkey",
            "description": "Complete nutrition for adult cats.",
            "price": 22.99,
            "category": "Cat",
            "in_stock": true,
            "image_url": "https://images.unsplash.com/photo-1592194996308-7b43878e84a9?w=800&q=80&auto=format&fit=crop",
            "rating": 4.4,
            "brand": "MeowMunch",
            "weight": "4 lb",
        }),
    ]
}
