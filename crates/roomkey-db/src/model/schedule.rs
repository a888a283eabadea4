use chrono::{DateTime, Utc};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

// Re-export DayOfWeek for public API
pub use crate::db::enums::DayOfWeek;

/// A class occupying a room between `start_time` and `end_time`.
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
#[diesel(table_name = schema::schedule)]
#[diesel(check_for_backend(Pg))]
pub struct Schedule {
    pub id: uuid::Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub day_of_week: DayOfWeek,
    pub room_name: String,
    pub instructor_name: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    /// ## Summary
    /// Returns true if `at` falls inside `[start_time, end_time]`, both bounds inclusive.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start_time <= at && at <= self.end_time
    }
}
