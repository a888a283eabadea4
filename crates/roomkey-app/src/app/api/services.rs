//! Builds per-request services from the depot.

use salvo::Depot;

use roomkey_service::directory::DirectoryService;
use roomkey_service::record::{RecordService, SchedulePolicy};

use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::store_handler::{get_clock_from_depot, get_store_from_depot};

pub(super) fn record_service(depot: &Depot) -> AppResult<RecordService> {
    let settings = get_config_from_depot(depot)?;
    let policy = SchedulePolicy::from_config(&settings.schedule)?;
    Ok(
        RecordService::new(get_store_from_depot(depot)?, get_clock_from_depot(depot)?)
            .with_policy(policy),
    )
}

pub(super) fn directory_service(depot: &Depot) -> AppResult<DirectoryService> {
    let settings = get_config_from_depot(depot)?;
    Ok(
        DirectoryService::new(get_store_from_depot(depot)?, get_clock_from_depot(depot)?)
            .with_timezone(settings.schedule.tz()?),
    )
}
