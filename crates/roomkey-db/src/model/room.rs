use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{db::schema, model};

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
#[diesel(table_name = schema::room)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::building::Building, foreign_key = building_id))]
pub struct Room {
    pub id: uuid::Uuid,
    pub name: String,
    pub floor: i32,
    pub building_id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
