use salvo::{Depot, Request, Response, Router, handler};

use roomkey_core::constants::SCHEDULE_ROUTE_COMPONENT;
use roomkey_db::model::schedule::Schedule;
use roomkey_service::directory::CreateScheduleRequest;

use super::response::{parse_body, respond};
use super::services::directory_service;
use crate::error::AppResult;

#[handler]
async fn list_schedules(depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        list(depot).await,
        "Schedules Found",
        "Could not list schedules",
    );
}

async fn list(depot: &Depot) -> AppResult<Vec<Schedule>> {
    Ok(directory_service(depot)?.list_schedules().await?)
}

/// Publishes a class in an existing room. Returns HTTP 400 if the window is inverted and HTTP 409 if the room is unknown.
#[handler]
async fn create_schedule(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        create(req, depot).await,
        "Schedule created",
        "Could not create schedule",
    );
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Schedule> {
    let request: CreateScheduleRequest = parse_body(req).await?;
    Ok(directory_service(depot)?.create_schedule(request).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SCHEDULE_ROUTE_COMPONENT)
        .get(list_schedules)
        .post(create_schedule)
}
