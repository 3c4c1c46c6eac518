use crate::{
    abstract_trait::document::DocumentStoreTrait,
    model::document::{Document, DocumentFilter},
};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use shared::errors::RepositoryError;
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};
use uuid::Uuid;

/// In-memory `DocumentStoreTrait` used by service and handler tests. Counts
/// reads and can be flipped into a failing mode to simulate an unreachable
/// store.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    pub read_calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    pub fn insert(&self, collection: &str, data: Value) -> Uuid {
        let id = Uuid::new_v4();
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id,
                data,
                created_at: Utc::now(),
            });
        id
    }

    pub fn read_count(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStoreTrait for MemoryDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<Uuid, RepositoryError> {
        self.check_available()?;
        Ok(self.insert(collection, document))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<DocumentFilter>,
    ) -> Result<Vec<Document>, RepositoryError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let collections = self.collections.lock().unwrap();
        let mut documents = collections.get(collection).cloned().unwrap_or_default();

        if let Some(DocumentFilter::IdIn(ids)) = filter {
            documents.retain(|doc| ids.contains(&doc.id));
        }

        Ok(documents)
    }

    async fn create_documents_if_empty(
        &self,
        collection: &str,
        documents: &[Value],
    ) -> Result<bool, RepositoryError> {
        self.check_available()?;

        let mut collections = self.collections.lock().unwrap();
        let bucket = collections.entry(collection.to_string()).or_default();

        if !bucket.is_empty() {
            return Ok(false);
        }

        for data in documents {
            bucket.push(Document {
                id: Uuid::new_v4(),
                data: data.clone(),
                created_at: Utc::now(),
            });
        }

        Ok(true)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_available()
    }

    async fn database_name(&self) -> Result<String, RepositoryError> {
        self.check_available()?;
        Ok("memory".to_string())
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, RepositoryError> {
        self.check_available()?;

        let mut names: Vec<String> = self.collections.lock().unwrap().keys().cloned().collect();
        names.sort();
        names.truncate(limit as usize);
        Ok(names)
    }
}
