//! Entity store capability consumed by the service layer.
//!
//! Services receive an `Arc<dyn EntityStore>` at construction time and never
//! reach for a global handle. Two backends exist:
//! - [`postgres::PgStore`], backed by the diesel-async connection pool
//! - [`memory::MemoryStore`], for local development and tests
//!
//! Lookups return `Ok(None)` when nothing matches; an `Err` always means the
//! backend itself failed.

use std::future::Future;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use tracing::Instrument;

use crate::db::enums::DayOfWeek;
use crate::error::DbResult;
use crate::model::{
    building::Building, instructor::Instructor, key::Key, record::Record, room::Room,
    schedule::Schedule, student::Student,
};

pub mod memory;
pub mod postgres;

pub type StoreFuture<'a, T> = BoxFuture<'a, DbResult<T>>;

/// Boxes `fut` so that it runs inside `span` on every poll.
pub(crate) fn traced<'a, T, F>(span: tracing::Span, fut: F) -> StoreFuture<'a, T>
where
    F: Future<Output = DbResult<T>> + Send + 'a,
{
    Box::pin(fut.instrument(span))
}

/// Parameters of a schedule window lookup.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleWindow<'a> {
    /// Instant that must fall inside `[start_time, end_time]`.
    pub at: DateTime<Utc>,
    pub room_name: &'a str,
    /// Restricts matches to one weekday when set.
    pub day_of_week: Option<DayOfWeek>,
    /// Maximum number of schedules to return.
    pub limit: i64,
}

pub trait EntityStore: Send + Sync {
    fn list_buildings(&self) -> StoreFuture<'_, Vec<Building>>;
    fn find_building_by_id(&self, id: uuid::Uuid) -> StoreFuture<'_, Option<Building>>;
    fn find_building_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Building>>;
    fn insert_building<'a>(&'a self, building: &'a Building) -> StoreFuture<'a, Building>;

    fn list_rooms(&self) -> StoreFuture<'_, Vec<Room>>;
    fn find_room_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Room>>;
    fn insert_room<'a>(&'a self, room: &'a Room) -> StoreFuture<'a, Room>;

    fn list_keys(&self) -> StoreFuture<'_, Vec<Key>>;
    fn find_key_by_rfid<'a>(&'a self, rfid: &'a str) -> StoreFuture<'a, Option<Key>>;
    fn insert_key<'a>(&'a self, key: &'a Key) -> StoreFuture<'a, Key>;

    fn list_students(&self) -> StoreFuture<'_, Vec<Student>>;
    fn find_student_by_rfid<'a>(&'a self, rfid: &'a str) -> StoreFuture<'a, Option<Student>>;
    fn insert_student<'a>(&'a self, student: &'a Student) -> StoreFuture<'a, Student>;

    fn list_instructors(&self) -> StoreFuture<'_, Vec<Instructor>>;
    fn find_instructor_by_school_id<'a>(
        &'a self,
        school_id: &'a str,
    ) -> StoreFuture<'a, Option<Instructor>>;
    fn insert_instructor<'a>(&'a self, instructor: &'a Instructor)
    -> StoreFuture<'a, Instructor>;

    fn list_schedules(&self) -> StoreFuture<'_, Vec<Schedule>>;
    /// Schedules whose window contains `window.at`, ordered by start time,
    /// creation time, then id.
    fn find_active_schedules<'a>(
        &'a self,
        window: ScheduleWindow<'a>,
    ) -> StoreFuture<'a, Vec<Schedule>>;
    fn insert_schedule<'a>(&'a self, schedule: &'a Schedule) -> StoreFuture<'a, Schedule>;

    /// All records, most recent first.
    fn list_records(&self) -> StoreFuture<'_, Vec<Record>>;
    fn insert_record<'a>(&'a self, record: &'a Record) -> StoreFuture<'a, Record>;

    fn backend_name(&self) -> &'static str;
}
