use salvo::{Depot, Request, Response, Router, handler};

use roomkey_core::constants::KEY_ROUTE_COMPONENT;
use roomkey_db::model::key::Key;
use roomkey_service::directory::CreateKeyRequest;

use super::response::{parse_body, respond};
use super::services::directory_service;
use crate::error::AppResult;

#[handler]
async fn list_keys(depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        list(depot).await,
        "Keys Found",
        "Could not list keys",
    );
}

async fn list(depot: &Depot) -> AppResult<Vec<Key>> {
    Ok(directory_service(depot)?.list_keys().await?)
}

/// Registers a key for an existing room. Returns HTTP 409 if the room is unknown or the RFID is taken.
#[handler]
async fn create_key(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        create(req, depot).await,
        "Key created",
        "Could not create key",
    );
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Key> {
    let request: CreateKeyRequest = parse_body(req).await?;
    Ok(directory_service(depot)?.create_key(request).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(KEY_ROUTE_COMPONENT)
        .get(list_keys)
        .post(create_key)
}
