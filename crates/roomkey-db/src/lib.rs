//! Persistence layer: diesel schema and models, the Postgres connection pool,
//! and the `EntityStore` capability with Postgres and in-memory backends.

pub mod db;
pub mod error;
pub mod model;
pub mod store;
