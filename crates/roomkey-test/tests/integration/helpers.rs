#![allow(clippy::unused_async, clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building a Salvo service over a fresh in-memory store and a pinned clock
//! - Making HTTP requests
//! - Asserting on the JSON envelope and on store state
//!
//! ## Isolation
//! Every `TestApp` owns its own `MemoryStore`, so tests run in parallel without
//! sharing state.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use roomkey_test::app::ConfigHandler;
use roomkey_test::component::clock::FixedClock;
use roomkey_test::component::config::Settings;
use roomkey_test::component::db::{MemoryStore, StoreHandler};

pub use roomkey_test::component::constants::*;
pub use tracing;

/// Monday 2024-03-04 at the given UTC time.
#[must_use]
pub fn monday(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, h, m, s)
        .single()
        .expect("valid instant")
}

/// Test configuration - in-memory backend, day of week not enforced.
fn test_config(extra: &str) -> Settings {
    Settings::from_toml_str(&format!("[database]\nbackend = \"memory\"\n{extra}"))
        .expect("test configuration should be valid")
}

/// A service plus direct access to the store behind it.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    settings: Settings,
}

impl TestApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            settings: test_config(""),
        }
    }

    /// Uses the given extra TOML (e.g. a `[schedule]` table) on top of the defaults.
    #[must_use]
    pub fn with_config(extra: &str) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            settings: test_config(extra),
        }
    }

    /// Returns a service whose clock is pinned to `now`.
    ///
    /// Services built from the same `TestApp` share one store.
    #[must_use]
    pub fn service_at(&self, now: DateTime<Utc>) -> Service {
        let router = Router::new()
            .hoop(StoreHandler {
                store: self.store.clone(),
                clock: Arc::new(FixedClock(now)),
            })
            .hoop(ConfigHandler::new(self.settings.clone()))
            .push(roomkey_test::app::api::routes());
        Service::new(router)
    }

    /// Seeds building ENG, room R101, student ABC (BSCS-3A) and a Physics
    /// class in R101 from 09:00 to 10:00 on Monday 2024-03-04.
    pub async fn seed_physics_class(&self) {
        let service = self.service_at(monday(8, 0, 0));

        TestRequest::post(BUILDING_ROUTE_PREFIX)
            .json(&json!({"name": "Engineering", "abbrv": "ENG"}))
            .send(&service)
            .await
            .assert_status(StatusCode::OK);

        TestRequest::post(ROOM_ROUTE_PREFIX)
            .json(&json!({"name": "R101", "floor": 1, "building_name": "Engineering"}))
            .send(&service)
            .await
            .assert_status(StatusCode::OK);

        TestRequest::post(STUDENT_ROUTE_PREFIX)
            .json(&json!({
                "first_name": "Juan",
                "last_name": "Dela Cruz",
                "school_id": "2021-0001",
                "rfid": "ABC",
                "college": "CCS",
                "course": "BSCS",
                "section": "BSCS-3A"
            }))
            .send(&service)
            .await
            .assert_status(StatusCode::OK);

        TestRequest::post(SCHEDULE_ROUTE_PREFIX)
            .json(&json!({
                "start_time": "2024-03-04T09:00:00Z",
                "end_time": "2024-03-04T10:00:00Z",
                "room_name": "R101",
                "instructor_name": "Ada Lovelace",
                "subject": "Physics"
            }))
            .send(&service)
            .await
            .assert_status(StatusCode::OK);
    }

    pub async fn record_count(&self) -> usize {
        self.store.record_count().await
    }
}

/// Body of a badge read.
#[must_use]
pub fn badge_read(student_rfid: &str, room_name: &str) -> Value {
    json!({"student_rfid": student_rfid, "room_name": room_name})
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new POST request.
    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the Content-Type header.
    #[must_use]
    pub fn content_type(self, content_type: &str) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(self, value: &Value) -> Self {
        self.content_type("application/json; charset=utf-8")
            .body(value.to_string())
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "POST" => TestClient::post(&url),
            _ => TestClient::get(&url),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts the envelope status field (`success` or `error`).
    #[must_use]
    pub fn assert_envelope(self, status: &str, message: &str) -> Self {
        let json = self.json();
        assert_eq!(json["status"], status, "unexpected envelope: {json}");
        assert_eq!(json["message"], message, "unexpected envelope: {json}");
        if status == "error" {
            assert!(json["data"].is_null(), "error carried data: {json}");
        }
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = self.body_string();
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the whole body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    /// Deserializes the envelope's `data` field.
    #[must_use]
    pub fn data<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.json()["data"].clone()).expect("data should deserialize")
    }
}
