#![allow(clippy::unused_async)]
//! Tests for the record endpoints.
//!
//! Verifies lookup failures, schedule window matching, and listing order.

use salvo::http::StatusCode;

use roomkey_test::component::model::record::Record;

use super::helpers::*;

// ============================================================================
// Creation failures
// ============================================================================

/// ## Summary
/// An unknown badge is rejected with 409 and leaves no record behind.
#[test_log::test(tokio::test)]
async fn unknown_badge_is_conflict() {
    let app = TestApp::new();
    app.seed_physics_class().await;

    TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("NOPE", "R101"))
        .send(&app.service_at(monday(9, 30, 0)))
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_envelope("error", "Student does not exist.");

    assert_eq!(app.record_count().await, 0);
}

/// ## Summary
/// An unknown room is rejected with 409 and leaves no record behind.
#[test_log::test(tokio::test)]
async fn unknown_room_is_conflict() {
    let app = TestApp::new();
    app.seed_physics_class().await;

    TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("ABC", "R999"))
        .send(&app.service_at(monday(9, 30, 0)))
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_envelope("error", "Room does not exist.");

    assert_eq!(app.record_count().await, 0);
}

#[test_log::test(tokio::test)]
async fn badge_read_outside_any_class_is_bad_input() {
    let app = TestApp::new();
    app.seed_physics_class().await;

    TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("ABC", "R101"))
        .send(&app.service_at(monday(14, 0, 0)))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_envelope("error", "Invalid input.");

    assert_eq!(app.record_count().await, 0);
}

#[test_log::test(tokio::test)]
async fn malformed_bodies_are_bad_input() {
    let app = TestApp::new();
    app.seed_physics_class().await;
    let service = app.service_at(monday(9, 30, 0));

    for body in [
        "{}",
        r#"{"student_rfid":"ABC"}"#,
        r#"{"student_rfid":"ABC","room_name":"R101","note":"x"}"#,
        r#"{"student_rfid":["ABC"],"room_name":"R101"}"#,
        r#"{"student_rfid":"","room_name":"R101"}"#,
        "not json",
    ] {
        TestRequest::post(RECORD_ROUTE_PREFIX)
            .content_type("application/json")
            .body(body)
            .send(&service)
            .await
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_body_contains("Review your input");
    }

    assert_eq!(app.record_count().await, 0);
}

// ============================================================================
// Successful creation
// ============================================================================

/// ## Summary
/// A badge read during class copies the student's section, the room and the
/// class subject into the record.
#[test_log::test(tokio::test)]
async fn badge_read_during_class_creates_record() {
    let app = TestApp::new();
    app.seed_physics_class().await;

    let response = TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("ABC", "R101"))
        .send(&app.service_at(monday(9, 30, 0)))
        .await
        .assert_status(StatusCode::OK)
        .assert_envelope("success", "Record created");

    let record: Record = response.data();
    assert_eq!(record.section, "BSCS-3A");
    assert_eq!(record.subject, "Physics");
    assert_eq!(record.room_name, "R101");
    assert_eq!(record.student_name, "Juan Dela Cruz");
    assert_eq!(record.created_at, monday(9, 30, 0));
    assert_eq!(app.record_count().await, 1);
}

#[test_log::test(tokio::test)]
async fn class_window_is_inclusive_at_both_ends() {
    let app = TestApp::new();
    app.seed_physics_class().await;

    for (instant, expected) in [
        (monday(9, 0, 0), StatusCode::OK),
        (monday(10, 0, 0), StatusCode::OK),
        (monday(8, 59, 59), StatusCode::BAD_REQUEST),
        (monday(10, 0, 1), StatusCode::BAD_REQUEST),
    ] {
        TestRequest::post(RECORD_ROUTE_PREFIX)
            .json(&badge_read("ABC", "R101"))
            .send(&app.service_at(instant))
            .await
            .assert_status(expected);
    }

    assert_eq!(app.record_count().await, 2);
}

#[test_log::test(tokio::test)]
async fn repeated_badge_reads_are_all_recorded() {
    let app = TestApp::new();
    app.seed_physics_class().await;
    let service = app.service_at(monday(9, 30, 0));

    let first: Record = TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("ABC", "R101"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .data();
    let second: Record = TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("ABC", "R101"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .data();

    assert_ne!(first.id, second.id);
    assert_eq!(app.record_count().await, 2);
}

#[test_log::test(tokio::test)]
async fn weekday_enforcement_rejects_reads_on_other_days() {
    let app = TestApp::with_config("[schedule]\nenforce_day_of_week = true\n");
    app.seed_physics_class().await;

    // Tag a second class for Friday inside the same Monday window.
    TestRequest::post(SCHEDULE_ROUTE_PREFIX)
        .json(&serde_json::json!({
            "start_time": "2024-03-04T11:00:00Z",
            "end_time": "2024-03-04T12:00:00Z",
            "day_of_week": "friday",
            "room_name": "R101",
            "instructor_name": "Ada Lovelace",
            "subject": "Chemistry"
        }))
        .send(&app.service_at(monday(8, 0, 0)))
        .await
        .assert_status(StatusCode::OK);

    TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("ABC", "R101"))
        .send(&app.service_at(monday(9, 30, 0)))
        .await
        .assert_status(StatusCode::OK);

    TestRequest::post(RECORD_ROUTE_PREFIX)
        .json(&badge_read("ABC", "R101"))
        .send(&app.service_at(monday(11, 30, 0)))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Listing
// ============================================================================

#[test_log::test(tokio::test)]
async fn listing_returns_newest_first() {
    let app = TestApp::new();
    app.seed_physics_class().await;

    TestRequest::get(RECORD_ROUTE_PREFIX)
        .send(&app.service_at(monday(9, 0, 0)))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_envelope("error", "No Records data found");

    for instant in [monday(9, 10, 0), monday(9, 20, 0)] {
        TestRequest::post(RECORD_ROUTE_PREFIX)
            .json(&badge_read("ABC", "R101"))
            .send(&app.service_at(instant))
            .await
            .assert_status(StatusCode::OK);
    }

    let records: Vec<Record> = TestRequest::get(RECORD_ROUTE_PREFIX)
        .send(&app.service_at(monday(9, 30, 0)))
        .await
        .assert_status(StatusCode::OK)
        .assert_envelope("success", "Records Found")
        .data();

    let created: Vec<_> = records.iter().map(|r| r.created_at).collect();
    assert_eq!(created, vec![monday(9, 20, 0), monday(9, 10, 0)]);
}
