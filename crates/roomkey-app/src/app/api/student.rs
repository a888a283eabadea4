use salvo::{Depot, Request, Response, Router, handler};

use roomkey_core::constants::STUDENT_ROUTE_COMPONENT;
use roomkey_db::model::student::Student;
use roomkey_service::directory::CreateStudentRequest;

use super::response::{parse_body, respond};
use super::services::directory_service;
use crate::error::AppResult;

#[handler]
async fn list_students(depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        list(depot).await,
        "Students Found",
        "Could not list students",
    );
}

async fn list(depot: &Depot) -> AppResult<Vec<Student>> {
    Ok(directory_service(depot)?.list_students().await?)
}

/// Enrolls a student badge. Returns HTTP 409 if the badge is already assigned.
#[handler]
async fn create_student(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        create(req, depot).await,
        "Student created",
        "Could not create student",
    );
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Student> {
    let request: CreateStudentRequest = parse_body(req).await?;
    Ok(directory_service(depot)?.create_student(request).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(STUDENT_ROUTE_COMPONENT)
        .get(list_students)
        .post(create_student)
}
