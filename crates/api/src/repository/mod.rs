pub mod document;

pub use self::document::DocumentStore;
