use diesel::prelude::*;

use crate::db::schema::record;

/// ## Summary
/// Returns a query selecting every record, most recent first.
///
/// Ties on `created_at` fall back to the time-ordered id so that later inserts
/// still sort first.
#[must_use]
pub fn newest_first() -> record::BoxedQuery<'static, diesel::pg::Pg> {
    record::table
        .order((record::created_at.desc(), record::id.desc()))
        .into_boxed()
}
