//! HTTP surface of the roomkey service: Salvo routes, depot handlers and the
//! JSON response envelope.

pub mod app;
pub mod config;
pub mod error;
pub mod store_handler;
