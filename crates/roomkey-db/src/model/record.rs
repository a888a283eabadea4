use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Receipt of a student's badge read at a room during a scheduled class.
///
/// Student, room and subject values are copied at creation time and are never
/// refreshed from their sources.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Identifiable,
    Queryable,
    Selectable,
    Insertable,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = schema::record)]
#[diesel(check_for_backend(Pg))]
pub struct Record {
    pub id: uuid::Uuid,
    pub student_id: uuid::Uuid,
    pub schedule_id: uuid::Uuid,
    pub student_name: String,
    pub section: String,
    pub room_name: String,
    pub subject: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
