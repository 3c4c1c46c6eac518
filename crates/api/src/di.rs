use crate::{
    abstract_trait::{
        DynCatalogService, DynCheckoutService, DynDiagnosticsService, DynDocumentStore,
    },
    service::{CatalogService, CheckoutService, DiagnosticsService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub catalog: DynCatalogService,
    pub checkout: DynCheckoutService,
    pub diagnostics: DynDiagnosticsService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("catalog", &"CatalogService")
            .field("checkout", &"CheckoutService")
            .field("diagnostics", &"DiagnosticsService")
            .finish()
    }
}

impl DependenciesInject {
    /// Every service shares the one injected store handle; nothing holds a
    /// module-level singleton.
    pub fn new(store: DynDocumentStore) -> Self {
        let catalog: DynCatalogService = Arc::new(CatalogService::new(store.clone()));
        let checkout: DynCheckoutService = Arc::new(CheckoutService::new(store.clone()));
        let diagnostics: DynDiagnosticsService = Arc::new(DiagnosticsService::new(store));

        Self {
            catalog,
            checkout,
            diagnostics,
        }
    }
}
