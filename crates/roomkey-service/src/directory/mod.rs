//! Reference data behind badge reads: buildings, rooms, keys, students,
//! instructors and schedules.
//!
//! Every entity is append-only. Creation checks required fields, resolves any
//! referenced entity by name, and rejects duplicates of unique columns before
//! the insert; the store's own unique constraints catch races between the check
//! and the write.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

use roomkey_core::clock::Clock;
use roomkey_db::model::building::Building;
use roomkey_db::model::instructor::Instructor;
use roomkey_db::model::key::{Key, KeyStatus};
use roomkey_db::model::room::Room;
use roomkey_db::model::schedule::{DayOfWeek, Schedule};
use roomkey_db::model::student::Student;
use roomkey_db::store::EntityStore;

use crate::error::{ServiceError, ServiceResult};
use crate::record::ROOM_MISSING;
use crate::validate::require_text;

pub const BUILDING_MISSING: &str = "Building does not exist.";

fn review(e: ServiceError) -> ServiceError {
    ServiceError::BadInput(format!("Review your input: {e}"))
}

fn nothing_found<T>(rows: Vec<T>, entity: &str) -> ServiceResult<Vec<T>> {
    if rows.is_empty() {
        return Err(ServiceError::NotFound(format!("No {entity} data found")));
    }
    Ok(rows)
}

fn already_exists(entity: &str) -> ServiceError {
    ServiceError::Conflict(format!("{entity} already exists."))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBuildingRequest {
    pub name: String,
    pub abbrv: String,
}

impl CreateBuildingRequest {
    /// ## Errors
    /// Returns `BadInput` if a field is blank.
    pub fn validate(&self) -> ServiceResult<()> {
        require_text("name", &self.name)
            .and_then(|()| require_text("abbrv", &self.abbrv))
            .map_err(review)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRoomRequest {
    pub name: String,
    pub floor: i32,
    pub building_name: String,
}

impl CreateRoomRequest {
    /// ## Errors
    /// Returns `BadInput` if a name is blank or the floor is negative.
    pub fn validate(&self) -> ServiceResult<()> {
        require_text("name", &self.name)
            .and_then(|()| require_text("building_name", &self.building_name))
            .and_then(|()| {
                if self.floor < 0 {
                    return Err(ServiceError::BadInput(
                        "floor must not be negative".to_string(),
                    ));
                }
                Ok(())
            })
            .map_err(review)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateKeyRequest {
    pub rfid: String,
    pub room_name: String,
}

impl CreateKeyRequest {
    /// ## Errors
    /// Returns `BadInput` if a field is blank.
    pub fn validate(&self) -> ServiceResult<()> {
        require_text("rfid", &self.rfid)
            .and_then(|()| require_text("room_name", &self.room_name))
            .map_err(review)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
    pub rfid: String,
    pub college: String,
    pub course: String,
    pub section: String,
}

impl CreateStudentRequest {
    /// ## Errors
    /// Returns `BadInput` if a field is blank.
    pub fn validate(&self) -> ServiceResult<()> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("school_id", &self.school_id),
            ("rfid", &self.rfid),
            ("college", &self.college),
            ("course", &self.course),
            ("section", &self.section),
        ]
        .into_iter()
        .try_for_each(|(field, value)| require_text(field, value))
        .map_err(review)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateInstructorRequest {
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
}

impl CreateInstructorRequest {
    /// ## Errors
    /// Returns `BadInput` if a field is blank.
    pub fn validate(&self) -> ServiceResult<()> {
        require_text("first_name", &self.first_name)
            .and_then(|()| require_text("last_name", &self.last_name))
            .and_then(|()| require_text("school_id", &self.school_id))
            .map_err(review)
    }
}

/// Body of a create-schedule request.
///
/// Times are RFC 3339 instants. When `day_of_week` is omitted it is derived
/// from `start_time` in the service's timezone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateScheduleRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub day_of_week: Option<DayOfWeek>,
    pub room_name: String,
    pub instructor_name: String,
    pub subject: String,
}

impl CreateScheduleRequest {
    /// ## Errors
    /// Returns `BadInput` if a field is blank or the window ends before it starts.
    pub fn validate(&self) -> ServiceResult<()> {
        require_text("room_name", &self.room_name)
            .and_then(|()| require_text("instructor_name", &self.instructor_name))
            .and_then(|()| require_text("subject", &self.subject))
            .and_then(|()| {
                if self.end_time < self.start_time {
                    return Err(ServiceError::BadInput(
                        "end_time must not precede start_time".to_string(),
                    ));
                }
                Ok(())
            })
            .map_err(review)
    }
}

pub struct DirectoryService {
    store: Arc<dyn EntityStore>,
    clock: Arc<dyn Clock>,
    timezone: chrono_tz::Tz,
}

impl DirectoryService {
    #[must_use]
    pub fn new(store: Arc<dyn EntityStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            timezone: chrono_tz::UTC,
        }
    }

    /// Timezone used to derive a schedule's weekday when the request omits it.
    #[must_use]
    pub fn with_timezone(mut self, timezone: chrono_tz::Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// ## Errors
    /// Returns `NotFound` when no building exists.
    #[tracing::instrument(skip(self))]
    pub async fn list_buildings(&self) -> ServiceResult<Vec<Building>> {
        nothing_found(self.store.list_buildings().await?, "Buildings")
    }

    /// ## Errors
    /// - `BadInput` if a field is blank
    /// - `Conflict` if the name is taken
    #[tracing::instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_building(&self, request: CreateBuildingRequest) -> ServiceResult<Building> {
        request.validate()?;

        if self
            .store
            .find_building_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(already_exists("Building"));
        }

        let building = Building {
            id: uuid::Uuid::now_v7(),
            name: request.name,
            abbrv: request.abbrv,
            created_at: self.clock.now(),
        };
        let stored = self.store.insert_building(&building).await?;

        tracing::info!(building_id = %stored.id, "Building created");
        Ok(stored)
    }

    /// ## Errors
    /// Returns `NotFound` when no room exists.
    #[tracing::instrument(skip(self))]
    pub async fn list_rooms(&self) -> ServiceResult<Vec<Room>> {
        nothing_found(self.store.list_rooms().await?, "Rooms")
    }

    /// ## Errors
    /// - `BadInput` if a field is invalid
    /// - `Conflict` if the building is unknown or the room name is taken
    #[tracing::instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_room(&self, request: CreateRoomRequest) -> ServiceResult<Room> {
        request.validate()?;

        let Some(building) = self
            .store
            .find_building_by_name(&request.building_name)
            .await?
        else {
            return Err(ServiceError::Conflict(BUILDING_MISSING.to_string()));
        };

        if self.store.find_room_by_name(&request.name).await?.is_some() {
            return Err(already_exists("Room"));
        }

        let room = Room {
            id: uuid::Uuid::now_v7(),
            name: request.name,
            floor: request.floor,
            building_id: building.id,
            created_at: self.clock.now(),
        };
        let stored = self.store.insert_room(&room).await?;

        tracing::info!(room_id = %stored.id, building_id = %building.id, "Room created");
        Ok(stored)
    }

    /// ## Errors
    /// Returns `NotFound` when no key exists.
    #[tracing::instrument(skip(self))]
    pub async fn list_keys(&self) -> ServiceResult<Vec<Key>> {
        nothing_found(self.store.list_keys().await?, "Keys")
    }

    /// ## Summary
    /// Registers a key for a room. The key starts out available and carries
    /// copies of the room's name and floor and of its building's name.
    ///
    /// ## Errors
    /// - `BadInput` if a field is blank
    /// - `Conflict` if the room is unknown or the RFID is taken
    /// - `CoreError` if the room points at a building that no longer resolves
    #[tracing::instrument(skip(self, request), fields(room_name = %request.room_name))]
    pub async fn create_key(&self, request: CreateKeyRequest) -> ServiceResult<Key> {
        request.validate()?;

        let Some(room) = self.store.find_room_by_name(&request.room_name).await? else {
            return Err(ServiceError::Conflict(ROOM_MISSING.to_string()));
        };

        let building = self
            .store
            .find_building_by_id(room.building_id)
            .await?
            .ok_or(roomkey_core::error::CoreError::InvariantViolation(
                "room references a missing building",
            ))?;

        if self.store.find_key_by_rfid(&request.rfid).await?.is_some() {
            return Err(already_exists("Key"));
        }

        let key = Key {
            id: uuid::Uuid::now_v7(),
            rfid: request.rfid,
            status: KeyStatus::default(),
            building_id: building.id,
            room_id: room.id,
            room_name: room.name,
            room_floor: room.floor,
            building_name: building.name,
            created_at: self.clock.now(),
        };
        let stored = self.store.insert_key(&key).await?;

        tracing::info!(key_id = %stored.id, room_id = %stored.room_id, "Key created");
        Ok(stored)
    }

    /// ## Errors
    /// Returns `NotFound` when no student exists.
    #[tracing::instrument(skip(self))]
    pub async fn list_students(&self) -> ServiceResult<Vec<Student>> {
        nothing_found(self.store.list_students().await?, "Students")
    }

    /// ## Errors
    /// - `BadInput` if a field is blank
    /// - `Conflict` if the badge is already assigned
    #[tracing::instrument(skip(self, request))]
    pub async fn create_student(&self, request: CreateStudentRequest) -> ServiceResult<Student> {
        request.validate()?;

        if self
            .store
            .find_student_by_rfid(&request.rfid)
            .await?
            .is_some()
        {
            return Err(already_exists("Student"));
        }

        let student = Student {
            id: uuid::Uuid::now_v7(),
            first_name: request.first_name,
            last_name: request.last_name,
            school_id: request.school_id,
            rfid: request.rfid,
            college: request.college,
            course: request.course,
            section: request.section,
            created_at: self.clock.now(),
        };
        let stored = self.store.insert_student(&student).await?;

        tracing::info!(student_id = %stored.id, "Student created");
        Ok(stored)
    }

    /// ## Errors
    /// Returns `NotFound` when no instructor exists.
    #[tracing::instrument(skip(self))]
    pub async fn list_instructors(&self) -> ServiceResult<Vec<Instructor>> {
        nothing_found(self.store.list_instructors().await?, "Instructors")
    }

    /// ## Errors
    /// - `BadInput` if a field is blank
    /// - `Conflict` if the school id is taken
    #[tracing::instrument(skip(self, request))]
    pub async fn create_instructor(
        &self,
        request: CreateInstructorRequest,
    ) -> ServiceResult<Instructor> {
        request.validate()?;

        if self
            .store
            .find_instructor_by_school_id(&request.school_id)
            .await?
            .is_some()
        {
            return Err(already_exists("Instructor"));
        }

        let instructor = Instructor {
            id: uuid::Uuid::now_v7(),
            first_name: request.first_name,
            last_name: request.last_name,
            school_id: request.school_id,
            created_at: self.clock.now(),
        };
        let stored = self.store.insert_instructor(&instructor).await?;

        tracing::info!(instructor_id = %stored.id, "Instructor created");
        Ok(stored)
    }

    /// ## Errors
    /// Returns `NotFound` when no schedule exists.
    #[tracing::instrument(skip(self))]
    pub async fn list_schedules(&self) -> ServiceResult<Vec<Schedule>> {
        nothing_found(self.store.list_schedules().await?, "Schedules")
    }

    /// ## Summary
    /// Publishes a class in a room. Overlapping schedules are accepted.
    ///
    /// ## Errors
    /// - `BadInput` if a field is blank or the window is inverted
    /// - `Conflict` if the room is unknown
    #[tracing::instrument(skip(self, request), fields(room_name = %request.room_name))]
    pub async fn create_schedule(&self, request: CreateScheduleRequest) -> ServiceResult<Schedule> {
        request.validate()?;

        let Some(room) = self.store.find_room_by_name(&request.room_name).await? else {
            return Err(ServiceError::Conflict(ROOM_MISSING.to_string()));
        };

        let day_of_week = request.day_of_week.unwrap_or_else(|| {
            DayOfWeek::from(request.start_time.with_timezone(&self.timezone).weekday())
        });

        let schedule = Schedule {
            id: uuid::Uuid::now_v7(),
            start_time: request.start_time,
            end_time: request.end_time,
            day_of_week,
            room_name: room.name,
            instructor_name: request.instructor_name,
            subject: request.subject,
            created_at: self.clock.now(),
        };
        let stored = self.store.insert_schedule(&schedule).await?;

        tracing::info!(
            schedule_id = %stored.id,
            start = %stored.start_time,
            end = %stored.end_time,
            "Schedule created"
        );
        Ok(stored)
    }
}
