use crate::model::document::{Document, DocumentFilter};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynDocumentStore = Arc<dyn DocumentStoreTrait + Send + Sync>;

/// Generic access to the document store. Documents are addressed by
/// collection name; no shape validation happens at this layer.
#[async_trait]
pub trait DocumentStoreTrait {
    /// Inserts `document` into `collection` and returns the generated id.
    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<Uuid, RepositoryError>;

    /// Returns all documents in `collection` matching `filter`, or every
    /// document when no filter is given. Order is store-default and must not
    /// be relied upon.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<DocumentFilter>,
    ) -> Result<Vec<Document>, RepositoryError>;

    /// Inserts `documents` as a batch only when `collection` currently holds
    /// zero documents. The check and the insert run under a store-level
    /// guard, so concurrent callers cannot both seed. Returns whether the
    /// batch was inserted.
    async fn create_documents_if_empty(
        &self,
        collection: &str,
        documents: &[Value],
    ) -> Result<bool, RepositoryError>;

    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// Name of the backing database, if introspectable.
    async fn database_name(&self) -> Result<String, RepositoryError>;

    /// Up to `limit` distinct collection names.
    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, RepositoryError>;
}
