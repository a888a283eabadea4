use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{db::schema, model};

// Re-export KeyStatus for public API
pub use crate::db::enums::KeyStatus;

/// A physical key for a room. Room and building names are copied at creation.
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
    Associations,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = schema::room_key)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::room::Room, foreign_key = room_id))]
pub struct Key {
    pub id: uuid::Uuid,
    pub rfid: String,
    pub status: KeyStatus,
    pub building_id: uuid::Uuid,
    pub room_id: uuid::Uuid,
    pub room_name: String,
    pub room_floor: i32,
    pub building_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
