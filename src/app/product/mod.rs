//! 产品管理

pub mod handler;
pub mod model;
pub mod store;

pub use model::{Product, ProductPayload};
pub use store::ProductStore;
