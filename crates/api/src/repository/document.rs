use crate::{
    abstract_trait::document::DocumentStoreTrait,
    model::document::{Document, DocumentFilter},
};
use async_trait::async_trait;
use serde_json::Value;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

/// Document store backed by a single Postgres `documents` table
/// (`collection` discriminator + JSONB body). Ids are generated by the store
/// at insert time and never mutated afterwards.
#[derive(Clone)]
pub struct DocumentStore {
    db: ConnectionPool,
}

impl DocumentStore {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStoreTrait for DocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<Uuid, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO documents (collection, data)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(collection)
        .bind(document)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert document into '{collection}': {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<DocumentFilter>,
    ) -> Result<Vec<Document>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let documents = match filter {
            None => {
                sqlx::query_as::<_, Document>(
                    r#"
                    SELECT id, data, created_at
                    FROM documents
                    WHERE collection = $1
                    "#,
                )
                .bind(collection)
                .fetch_all(&mut *conn)
                .await
            }
            Some(DocumentFilter::IdIn(ids)) => {
                sqlx::query_as::<_, Document>(
                    r#"
                    SELECT id, data, created_at
                    FROM documents
                    WHERE collection = $1 AND id = ANY($2)
                    "#,
                )
                .bind(collection)
                .bind(ids)
                .fetch_all(&mut *conn)
                .await
            }
        }
        .map_err(|e| {
            error!("❌ Failed to fetch documents from '{collection}': {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(documents)
    }

    async fn create_documents_if_empty(
        &self,
        collection: &str,
        documents: &[Value],
    ) -> Result<bool, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Advisory xact lock serializes concurrent seeders of the same
        // collection; the lock is released at commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(collection)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM documents WHERE collection = $1",
        )
        .bind(collection)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if count > 0 {
            tx.commit().await.map_err(RepositoryError::from)?;
            return Ok(false);
        }

        for document in documents {
            sqlx::query("INSERT INTO documents (collection, data) VALUES ($1, $2)")
                .bind(collection)
                .bind(document)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!("❌ Failed to seed document into '{collection}': {:?}", e);
                    RepositoryError::from(e)
                })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🌱 Seeded {} documents into empty collection '{collection}'",
            documents.len()
        );

        Ok(true)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn database_name(&self) -> Result<String, RepositoryError> {
        let name = sqlx::query_scalar::<_, String>("SELECT current_database()")
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(name)
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, RepositoryError> {
        let collections = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(collections)
    }
}
