use salvo::{Depot, Request, Response, Router, handler};

use roomkey_core::constants::INSTRUCTOR_ROUTE_COMPONENT;
use roomkey_db::model::instructor::Instructor;
use roomkey_service::directory::CreateInstructorRequest;

use super::response::{parse_body, respond};
use super::services::directory_service;
use crate::error::AppResult;

#[handler]
async fn list_instructors(depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        list(depot).await,
        "Instructors Found",
        "Could not list instructors",
    );
}

async fn list(depot: &Depot) -> AppResult<Vec<Instructor>> {
    Ok(directory_service(depot)?.list_instructors().await?)
}

/// Registers an instructor. Returns HTTP 409 if the school id is taken.
#[handler]
async fn create_instructor(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        create(req, depot).await,
        "Instructor created",
        "Could not create instructor",
    );
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Instructor> {
    let request: CreateInstructorRequest = parse_body(req).await?;
    Ok(directory_service(depot)?.create_instructor(request).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(INSTRUCTOR_ROUTE_COMPONENT)
        .get(list_instructors)
        .post(create_instructor)
}
