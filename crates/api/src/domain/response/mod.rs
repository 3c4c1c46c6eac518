pub mod checkout;
pub mod diagnostics;
pub mod product;
