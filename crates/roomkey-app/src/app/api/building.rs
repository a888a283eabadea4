use salvo::{Depot, Request, Response, Router, handler};

use roomkey_core::constants::BUILDING_ROUTE_COMPONENT;
use roomkey_db::model::building::Building;
use roomkey_service::directory::CreateBuildingRequest;

use super::response::{parse_body, respond};
use super::services::directory_service;
use crate::error::AppResult;

#[handler]
async fn list_buildings(depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        list(depot).await,
        "Buildings Found",
        "Could not list buildings",
    );
}

async fn list(depot: &Depot) -> AppResult<Vec<Building>> {
    Ok(directory_service(depot)?.list_buildings().await?)
}

/// Registers a building. Returns HTTP 409 if the name is taken.
#[handler]
async fn create_building(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(
        res,
        create(req, depot).await,
        "Building created",
        "Could not create building",
    );
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<Building> {
    let request: CreateBuildingRequest = parse_body(req).await?;
    Ok(directory_service(depot)?.create_building(request).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(BUILDING_ROUTE_COMPONENT)
        .get(list_buildings)
        .post(create_building)
}
