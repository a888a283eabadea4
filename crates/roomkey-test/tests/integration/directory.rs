#![allow(clippy::unused_async)]
//! Tests for the building, room, key, student, instructor and schedule endpoints.

use salvo::http::StatusCode;
use serde_json::json;

use roomkey_test::component::db::enums::{DayOfWeek, KeyStatus};
use roomkey_test::component::model::key::Key;
use roomkey_test::component::model::schedule::Schedule;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn empty_collections_are_not_found() {
    let app = TestApp::new();
    let service = app.service_at(monday(8, 0, 0));

    for (path, message) in [
        (BUILDING_ROUTE_PREFIX, "No Buildings data found"),
        (ROOM_ROUTE_PREFIX, "No Rooms data found"),
        (KEY_ROUTE_PREFIX, "No Keys data found"),
        (STUDENT_ROUTE_PREFIX, "No Students data found"),
        (INSTRUCTOR_ROUTE_PREFIX, "No Instructors data found"),
        (SCHEDULE_ROUTE_PREFIX, "No Schedules data found"),
    ] {
        TestRequest::get(path)
            .send(&service)
            .await
            .assert_status(StatusCode::NOT_FOUND)
            .assert_envelope("error", message);
    }
}

#[test_log::test(tokio::test)]
async fn seeded_collections_are_listed() {
    let app = TestApp::new();
    app.seed_physics_class().await;
    let service = app.service_at(monday(8, 0, 0));

    for (path, message) in [
        (BUILDING_ROUTE_PREFIX, "Buildings Found"),
        (ROOM_ROUTE_PREFIX, "Rooms Found"),
        (STUDENT_ROUTE_PREFIX, "Students Found"),
        (SCHEDULE_ROUTE_PREFIX, "Schedules Found"),
    ] {
        let listed: Vec<serde_json::Value> = TestRequest::get(path)
            .send(&service)
            .await
            .assert_status(StatusCode::OK)
            .assert_envelope("success", message)
            .data();
        assert_eq!(listed.len(), 1, "{path}");
    }
}

#[test_log::test(tokio::test)]
async fn duplicates_are_conflicts() {
    let app = TestApp::new();
    app.seed_physics_class().await;
    let service = app.service_at(monday(8, 0, 0));

    TestRequest::post(BUILDING_ROUTE_PREFIX)
        .json(&json!({"name": "Engineering", "abbrv": "ENG2"}))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_envelope("error", "Building already exists.");

    TestRequest::post(ROOM_ROUTE_PREFIX)
        .json(&json!({"name": "R101", "floor": 2, "building_name": "Engineering"}))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);

    let instructor = json!({"first_name": "Ada", "last_name": "Lovelace", "school_id": "FAC-1"});
    TestRequest::post(INSTRUCTOR_ROUTE_PREFIX)
        .json(&instructor)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_envelope("success", "Instructor created");
    TestRequest::post(INSTRUCTOR_ROUTE_PREFIX)
        .json(&instructor)
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[test_log::test(tokio::test)]
async fn room_in_unknown_building_is_conflict() {
    let app = TestApp::new();

    TestRequest::post(ROOM_ROUTE_PREFIX)
        .json(&json!({"name": "R101", "floor": 1, "building_name": "Nowhere"}))
        .send(&app.service_at(monday(8, 0, 0)))
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_envelope("error", "Building does not exist.");
}

#[test_log::test(tokio::test)]
async fn key_is_registered_available() {
    let app = TestApp::new();
    app.seed_physics_class().await;

    let key: Key = TestRequest::post(KEY_ROUTE_PREFIX)
        .json(&json!({"rfid": "KEY-101", "room_name": "R101"}))
        .send(&app.service_at(monday(8, 0, 0)))
        .await
        .assert_status(StatusCode::OK)
        .assert_envelope("success", "Key created")
        .data();

    assert_eq!(key.status, KeyStatus::Available);
    assert_eq!(key.room_name, "R101");
    assert_eq!(key.building_name, "Engineering");
}

#[test_log::test(tokio::test)]
async fn schedule_validation() {
    let app = TestApp::new();
    app.seed_physics_class().await;
    let service = app.service_at(monday(8, 0, 0));

    TestRequest::post(SCHEDULE_ROUTE_PREFIX)
        .json(&json!({
            "start_time": "2024-03-04T12:00:00Z",
            "end_time": "2024-03-04T11:00:00Z",
            "room_name": "R101",
            "instructor_name": "Ada Lovelace",
            "subject": "Chemistry"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    TestRequest::post(SCHEDULE_ROUTE_PREFIX)
        .json(&json!({
            "start_time": "2024-03-04T11:00:00Z",
            "end_time": "2024-03-04T12:00:00Z",
            "room_name": "R999",
            "instructor_name": "Ada Lovelace",
            "subject": "Chemistry"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_envelope("error", "Room does not exist.");

    let schedule: Schedule = TestRequest::post(SCHEDULE_ROUTE_PREFIX)
        .json(&json!({
            "start_time": "2024-03-04T11:00:00Z",
            "end_time": "2024-03-04T12:00:00Z",
            "room_name": "R101",
            "instructor_name": "Ada Lovelace",
            "subject": "Chemistry"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .data();
    assert_eq!(schedule.day_of_week, DayOfWeek::Monday);
}

#[test_log::test(tokio::test)]
async fn healthcheck_is_reachable() {
    let app = TestApp::new();
    let response = TestRequest::get("/api/app/healthcheck")
        .send(&app.service_at(monday(8, 0, 0)))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body_string(), "OK");
}
