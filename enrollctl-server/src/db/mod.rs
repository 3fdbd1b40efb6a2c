//! Database access: connection pool and repositories

pub mod pool;
pub mod repos;

pub use pool::{connect_options, create_pool, create_pool_with_options};
pub use repos::{DbError, StudentRepo};
