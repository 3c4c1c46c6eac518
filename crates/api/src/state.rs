use crate::{
    abstract_trait::DynDocumentStore, di::DependenciesInject, repository::DocumentStore,
};
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_store(Arc::new(DocumentStore::new(pool)))
    }

    /// Wires the service graph around an arbitrary store implementation.
    pub fn with_store(store: DynDocumentStore) -> Self {
        Self {
            di_container: DependenciesInject::new(store),
        }
    }
}
