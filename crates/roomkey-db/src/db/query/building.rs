use diesel::prelude::*;

use crate::db::schema::building;

/// ## Summary
/// Returns a query to select all buildings in creation order.
#[must_use]
pub fn all() -> building::BoxedQuery<'static, diesel::pg::Pg> {
    building::table
        .order((building::created_at.asc(), building::id.asc()))
        .into_boxed()
}

/// Returns a query to find a building by id.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> building::BoxedQuery<'static, diesel::pg::Pg> {
    building::table.filter(building::id.eq(id)).into_boxed()
}

/// ## Summary
/// Returns a query to find a building by its unique name.
#[must_use]
pub fn by_name(name: &str) -> building::BoxedQuery<'_, diesel::pg::Pg> {
    building::table.filter(building::name.eq(name)).into_boxed()
}
