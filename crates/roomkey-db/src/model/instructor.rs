use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

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
#[diesel(table_name = schema::instructor)]
#[diesel(check_for_backend(Pg))]
pub struct Instructor {
    pub id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
