use diesel::prelude::*;

use crate::db::schema::room_key;

/// ## Summary
/// Returns a query to select all keys.
#[must_use]
pub fn all() -> room_key::BoxedQuery<'static, diesel::pg::Pg> {
    room_key::table
        .order((room_key::created_at.asc(), room_key::id.asc()))
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a key by the RFID tag attached to it.
#[must_use]
pub fn by_rfid(rfid: &str) -> room_key::BoxedQuery<'_, diesel::pg::Pg> {
    room_key::table.filter(room_key::rfid.eq(rfid)).into_boxed()
}
