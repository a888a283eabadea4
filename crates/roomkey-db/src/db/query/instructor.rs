use diesel::prelude::*;

use crate::db::schema::instructor;

/// ## Summary
/// Returns a query to select all instructors in creation order.
#[must_use]
pub fn all() -> instructor::BoxedQuery<'static, diesel::pg::Pg> {
    instructor::table
        .order((instructor::created_at.asc(), instructor::id.asc()))
        .into_boxed()
}

#[must_use]
pub fn by_school_id(school_id: &str) -> instructor::BoxedQuery<'_, diesel::pg::Pg> {
    instructor::table.filter(instructor::school_id.eq(school_id)).into_boxed()
}
