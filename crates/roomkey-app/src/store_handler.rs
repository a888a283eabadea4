use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use roomkey_core::clock::Clock;
use roomkey_core::error::CoreError;
use roomkey_db::store::EntityStore;

/// Injects the entity store and the clock into every request's depot.
pub struct StoreHandler {
    pub store: Arc<dyn EntityStore>,
    pub clock: Arc<dyn Clock>,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl), fields(backend = self.store.backend_name()))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
        depot.inject(Arc::clone(&self.clock));
    }
}

/// ## Summary
/// Retrieves the entity store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn EntityStore>> {
    depot
        .obtain::<Arc<dyn EntityStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Entity store not found in depot").into())
}

/// ## Summary
/// Retrieves the clock from the depot.
///
/// ## Errors
/// Returns an error if the clock is not found in the depot.
pub fn get_clock_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn Clock>> {
    depot
        .obtain::<Arc<dyn Clock>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Clock not found in depot").into())
}
