//! Badge-read records: listing and validated creation.
//!
//! Creating a record resolves the student by badge, the room by name, and the
//! schedule whose window contains the current instant, then stores a snapshot
//! of those values. Every check runs before the single insert, so a failed
//! request never writes anything.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

use roomkey_core::clock::Clock;
use roomkey_core::config::ScheduleConfig;
use roomkey_core::error::CoreResult;
use roomkey_db::model::record::Record;
use roomkey_db::model::schedule::{DayOfWeek, Schedule};
use roomkey_db::store::{EntityStore, ScheduleWindow};

use crate::error::{ServiceError, ServiceResult};
use crate::validate::require_text;

pub const NO_RECORDS: &str = "No Records data found";
pub const STUDENT_MISSING: &str = "Student does not exist.";
pub const ROOM_MISSING: &str = "Room does not exist.";
pub const NO_ACTIVE_SCHEDULE: &str = "Invalid input.";

/// Body of a create-record request. Exactly these two fields are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRecordRequest {
    #[serde(alias = "StudentRFID")]
    pub student_rfid: String,
    #[serde(alias = "RoomName")]
    pub room_name: String,
}

impl CreateRecordRequest {
    /// ## Errors
    /// Returns `BadInput` if either field is blank.
    pub fn validate(&self) -> ServiceResult<()> {
        require_text("student_rfid", &self.student_rfid)
            .and_then(|()| require_text("room_name", &self.room_name))
            .map_err(|e| ServiceError::BadInput(format!("Review your input: {e}")))
    }
}

/// How badge reads are matched against schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePolicy {
    pub enforce_day_of_week: bool,
    pub timezone: chrono_tz::Tz,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            enforce_day_of_week: false,
            timezone: chrono_tz::UTC,
        }
    }
}

impl SchedulePolicy {
    /// ## Errors
    /// Returns an error if the configured timezone is unknown.
    pub fn from_config(config: &ScheduleConfig) -> CoreResult<Self> {
        Ok(Self {
            enforce_day_of_week: config.enforce_day_of_week,
            timezone: config.tz()?,
        })
    }

    /// Local weekday of `at` when day-of-week matching is enforced.
    #[must_use]
    pub fn day_filter(&self, at: DateTime<Utc>) -> Option<DayOfWeek> {
        self.enforce_day_of_week
            .then(|| DayOfWeek::from(at.with_timezone(&self.timezone).weekday()))
    }
}

pub struct RecordService {
    store: Arc<dyn EntityStore>,
    clock: Arc<dyn Clock>,
    policy: SchedulePolicy,
}

impl RecordService {
    #[must_use]
    pub fn new(store: Arc<dyn EntityStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            policy: SchedulePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SchedulePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// ## Summary
    /// Returns every record, most recent first.
    ///
    /// ## Errors
    /// Returns `NotFound` when no record exists, or a database error if the
    /// store fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_records(&self) -> ServiceResult<Vec<Record>> {
        let records = self.store.list_records().await?;
        if records.is_empty() {
            return Err(ServiceError::NotFound(NO_RECORDS.to_string()));
        }
        Ok(records)
    }

    /// ## Summary
    /// Validates a badge read and stores a record of it.
    ///
    /// ## Side Effects
    /// Inserts exactly one record on success and nothing on failure.
    ///
    /// ## Errors
    /// - `BadInput` if a field is blank or no schedule is active for the room
    /// - `Conflict` if the badge or the room is unknown
    /// - a database error if any store call fails
    #[tracing::instrument(skip(self, request), fields(room_name = %request.room_name))]
    pub async fn create_record(&self, request: CreateRecordRequest) -> ServiceResult<Record> {
        request.validate()?;

        let Some(student) = self
            .store
            .find_student_by_rfid(&request.student_rfid)
            .await?
        else {
            tracing::debug!("Badge does not match any student");
            return Err(ServiceError::Conflict(STUDENT_MISSING.to_string()));
        };

        let Some(room) = self.store.find_room_by_name(&request.room_name).await? else {
            tracing::debug!("Room name does not match any room");
            return Err(ServiceError::Conflict(ROOM_MISSING.to_string()));
        };

        let now = self.clock.now();
        let Some(schedule) = self.find_active_schedule(now, &room.name).await? else {
            tracing::debug!(at = %now, "No schedule active for room");
            return Err(ServiceError::BadInput(NO_ACTIVE_SCHEDULE.to_string()));
        };

        let record = Record {
            id: uuid::Uuid::now_v7(),
            student_id: student.id,
            schedule_id: schedule.id,
            student_name: student.full_name(),
            section: student.section,
            room_name: room.name,
            subject: schedule.subject,
            created_at: now,
        };

        let stored = self.store.insert_record(&record).await?;

        tracing::info!(
            record_id = %stored.id,
            student_id = %stored.student_id,
            subject = %stored.subject,
            "Record created"
        );

        Ok(stored)
    }

    /// ## Summary
    /// Finds the schedule of `room_name` whose window contains `now`.
    ///
    /// Bounds are inclusive. When several schedules overlap, the one starting
    /// earliest wins (then earliest created, then lowest id).
    ///
    /// ## Errors
    /// Returns a database error if the store fails. No match is `Ok(None)`.
    #[tracing::instrument(skip(self))]
    pub async fn find_active_schedule(
        &self,
        now: DateTime<Utc>,
        room_name: &str,
    ) -> ServiceResult<Option<Schedule>> {
        let matches = self
            .store
            .find_active_schedules(ScheduleWindow {
                at: now,
                room_name,
                day_of_week: self.policy.day_filter(now),
                limit: 2,
            })
            .await?;

        if matches.len() > 1 {
            tracing::warn!(
                room_name,
                first = %matches[0].id,
                second = %matches[1].id,
                "Overlapping schedules matched; using the earliest"
            );
        }

        Ok(matches.into_iter().next())
    }
}
