pub mod abstract_trait;
pub mod di;
pub mod domain;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
