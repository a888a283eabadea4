use salvo::{Depot, Request, Response, Router, handler};

use roomkey_core::constants::ROOM_ROUTE_COMPONENT;
use roomkey_db::model::room::Room;
use roomkey_service::directory::CreateRoomRequest;

use super::response::{parse_body, respond};
use super::services::directory_service;
use crate::error::AppResult;

#[handler]
async fn list_rooms(depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        list(depot).await,
        "Rooms Found",
        "Could not list rooms",
    );
}

async fn list(depot: &Depot) -> AppResult<Vec<Room>> {
    Ok(directory_service(depot)?.list_rooms().await?)
}

/// Adds a room to an existing building. Returns HTTP 409 if the building is unknown or the name is taken.
#[handler]
async fn create_room(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        create(req, depot).await,
        "Room created",
        "Could not create room",
    );
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Room> {
    let request: CreateRoomRequest = parse_body(req).await?;
    Ok(directory_service(depot)?.create_room(request).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ROOM_ROUTE_COMPONENT)
        .get(list_rooms)
        .post(create_room)
}
