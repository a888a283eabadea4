use diesel::prelude::*;

use crate::db::schema::room;

/// ## Summary
/// Returns a query to select all rooms.
#[must_use]
pub fn all() -> room::BoxedQuery<'static, diesel::pg::Pg> {
    room::table
        .order((room::created_at.asc(), room::id.asc()))
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a room by its unique name.
#[must_use]
pub fn by_name(name: &str) -> room::BoxedQuery<'_, diesel::pg::Pg> {
    room::table.filter(room::name.eq(name)).into_boxed()
}
