//! Carts

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::CartsServiceError;
pub use repository::*;
pub use service::*;
