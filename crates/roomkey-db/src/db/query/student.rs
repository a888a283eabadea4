use diesel::prelude::*;

use crate::db::schema::student;

/// ## Summary
/// Returns a query to select all students.
#[must_use]
pub fn all() -> student::BoxedQuery<'static, diesel::pg::Pg> {
    student::table
        .order((student::created_at.asc(), student::id.asc()))
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a student by badge identifier. Matching is exact and case-sensitive.
#[must_use]
pub fn by_rfid(rfid: &str) -> student::BoxedQuery<'_, diesel::pg::Pg> {
    student::table.filter(student::rfid.eq(rfid)).into_boxed()
}
