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
#[diesel(table_name = schema::student)]
#[diesel(check_for_backend(Pg))]
pub struct Student {
    pub id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
    /// Badge identifier read from the student's access card.
    pub rfid: String,
    pub college: String,
    pub course: String,
    pub section: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
