#![allow(clippy::unused_async)]
//! Integration tests for badge-read records and the directory endpoints.
//!
//! Each test builds the Salvo app over its own in-memory store with a pinned
//! clock and issues HTTP requests through `salvo::test::TestClient`.
//!
//! ```sh
//! cargo test -p roomkey-test
//! ```

mod directory;
mod helpers;
mod records;
