pub mod catalog;
pub mod checkout;
pub mod diagnostics;
pub mod document;

pub use self::catalog::{CatalogServiceTrait, DynCatalogService};
pub use self::checkout::{CheckoutServiceTrait, DynCheckoutService};
pub use self::diagnostics::{DiagnosticsServiceTrait, DynDiagnosticsService};
pub use self::document::{DocumentStoreTrait, DynDocumentStore};
