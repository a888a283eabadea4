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
#[diesel(table_name = schema::building)]
#[diesel(check_for_backend(Pg))]
pub struct Building {
    pub id: uuid::Uuid,
    pub name: String,
    pub abbrv: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
