use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db::enums::DayOfWeek;
use crate::db::schema::schedule;

/// ## Summary
/// Returns a query to select all schedules in creation order.
#[must_use]
pub fn all() -> schedule::BoxedQuery<'static, diesel::pg::Pg> {
    schedule::table
        .order((schedule::created_at.asc(), schedule::id.asc()))
        .into_boxed()
}

/// ## Summary
/// Returns a query for schedules of `room_name` whose window contains `at`.
///
/// Both bounds are inclusive. Results are ordered by start time, then creation
/// time, then id, so the first row is a stable pick when windows overlap.
#[must_use]
pub fn active_at(
    at: DateTime<Utc>,
    room_name: &str,
    day_of_week: Option<DayOfWeek>,
) -> schedule::BoxedQuery<'_, diesel::pg::Pg> {
    let mut query = schedule::table
        .filter(schedule::start_time.le(at))
        .filter(schedule::end_time.ge(at))
        .filter(schedule::room_name.eq(room_name))
        .order((
            schedule::start_time.asc(),
            schedule::created_at.asc(),
            schedule::id.asc(),
        ))
        .into_boxed();

    if let Some(day) = day_of_week {
        query = query.filter(schedule::day_of_week.eq(day));
    }

    query
}
