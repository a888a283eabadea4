mod app_specific;
mod building;
mod instructor;
mod key;
mod record;
pub mod response;
mod room;
mod schedule;
mod services;
mod student;

use salvo::Router;

// Re-export route constants from core
pub use roomkey_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, BUILDING_ROUTE_PREFIX, INSTRUCTOR_ROUTE_PREFIX,
    KEY_ROUTE_PREFIX, RECORD_ROUTE_PREFIX, ROOM_ROUTE_PREFIX, SCHEDULE_ROUTE_PREFIX,
    STUDENT_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router with every resource handler under `/api`.
///
/// The router expects `StoreHandler` and `ConfigHandler` to be hooped by the
/// caller.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(record::routes())
        .push(building::routes())
        .push(room::routes())
        .push(key::routes())
        .push(student::routes())
        .push(instructor::routes())
        .push(schedule::routes())
}
