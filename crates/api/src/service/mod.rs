pub mod catalog;
pub mod checkout;
pub mod diagnostics;

pub use self::catalog::CatalogService;
pub use self::checkout::CheckoutService;
pub use self::diagnostics::DiagnosticsService;

/// Collection holding product documents.
pub const PRODUCT_COLLECTION: &str = "product";
