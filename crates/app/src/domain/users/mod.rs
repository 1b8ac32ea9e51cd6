//! Users

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::UsersServiceError;
pub use repository::*;
pub use service::*;
