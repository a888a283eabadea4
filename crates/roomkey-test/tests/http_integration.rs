#![allow(clippy::doc_markdown, clippy::unused_async)]
//! Integration tests for the roomkey HTTP API.
//!
//! These tests drive the full router against the in-memory store.

mod integration;
