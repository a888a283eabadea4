use salvo::{Depot, Request, Response, Router, handler};

use roomkey_core::constants::RECORD_ROUTE_COMPONENT;
use roomkey_db::model::record::Record;
use roomkey_service::record::CreateRecordRequest;

use super::response::{parse_body, respond};
use super::services::record_service;
use crate::error::AppResult;

/// ## Summary
/// GET /api/record - Lists every record, newest first.
///
/// ## Errors
/// Returns HTTP 404 when no record exists and HTTP 500 if the store fails.
#[handler]
async fn list_records(depot: &mut Depot, res: &mut Response) {
    respond(res, list(depot).await, "Records Found", "Could not list records");
}

async fn list(depot: &Depot) -> AppResult<Vec<Record>> {
    Ok(record_service(depot)?.list_records().await?)
}

/// ## Summary
/// POST /api/record - Records a student's badge read at a room.
///
/// ## Side Effects
/// Inserts one record on success.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body or when no class is scheduled, HTTP
/// 409 when the badge or room is unknown, and HTTP 500 if the store fails.
#[handler]
async fn create_record(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing create record request");
    respond(
        res,
        create(req, depot).await,
        "Record created",
        "Could not create record",
    );
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Record> {
    let request: CreateRecordRequest = parse_body(req).await?;
    Ok(record_service(depot)?.create_record(request).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RECORD_ROUTE_COMPONENT)
        .get(list_records)
        .post(create_record)
}
