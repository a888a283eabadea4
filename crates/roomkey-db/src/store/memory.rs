//! In-memory implementation of the entity store.
//!
//! # Purpose
//! Keeps every table in a `Vec` guarded by a `tokio::sync::RwLock`. It exists for
//! local development and for tests that substitute it for Postgres.
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - Each insert checks uniqueness and appends under a single write lock, so a
//!   row is either stored whole or not at all.
//! - Unique columns mirror the Postgres schema: building and room names, key and
//!   student RFIDs, instructor school IDs.

use std::cmp::Reverse;

use tokio::sync::RwLock;

use super::{EntityStore, ScheduleWindow, StoreFuture};
use crate::error::DbError;
use crate::model::{
    building::Building, instructor::Instructor, key::Key, record::Record, room::Room,
    schedule::Schedule, student::Student,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    buildings: RwLock<Vec<Building>>,
    rooms: RwLock<Vec<Room>>,
    keys: RwLock<Vec<Key>>,
    students: RwLock<Vec<Student>>,
    instructors: RwLock<Vec<Instructor>>,
    schedules: RwLock<Vec<Schedule>>,
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records. Lets tests assert that failed writes left nothing behind.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

/// Appends `row` unless another row already holds the same unique value.
async fn insert_unique<T, F>(
    table: &RwLock<Vec<T>>,
    row: &T,
    column: &'static str,
    clashes: F,
) -> Result<T, DbError>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut rows = table.write().await;
    if rows.iter().any(clashes) {
        return Err(DbError::UniqueViolation(column.to_string()));
    }
    rows.push(row.clone());
    Ok(row.clone())
}

impl EntityStore for MemoryStore {
    fn list_buildings(&self) -> StoreFuture<'_, Vec<Building>> {
        Box::pin(async move { Ok(self.buildings.read().await.clone()) })
    }

    fn find_building_by_id(&self, id: uuid::Uuid) -> StoreFuture<'_, Option<Building>> {
        Box::pin(async move {
            Ok(self
                .buildings
                .read()
                .await
                .iter()
                .find(|b| b.id == id)
                .cloned())
        })
    }

    fn find_building_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Building>> {
        Box::pin(async move {
            Ok(self
                .buildings
                .read()
                .await
                .iter()
                .find(|b| b.name == name)
                .cloned())
        })
    }

    fn insert_building<'a>(&'a self, building: &'a Building) -> StoreFuture<'a, Building> {
        Box::pin(insert_unique(
            &self.buildings,
            building,
            "building.name",
            |b| b.name == building.name,
        ))
    }

    fn list_rooms(&self) -> StoreFuture<'_, Vec<Room>> {
        Box::pin(async move { Ok(self.rooms.read().await.clone()) })
    }

    fn find_room_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Room>> {
        Box::pin(async move {
            Ok(self
                .rooms
                .read()
                .await
                .iter()
                .find(|r| r.name == name)
                .cloned())
        })
    }

    fn insert_room<'a>(&'a self, room: &'a Room) -> StoreFuture<'a, Room> {
        Box::pin(insert_unique(&self.rooms, room, "room.name", |r| {
            r.name == room.name
        }))
    }

    fn list_keys(&self) -> StoreFuture<'_, Vec<Key>> {
        Box::pin(async move { Ok(self.keys.read().await.clone()) })
    }

    fn find_key_by_rfid<'a>(&'a self, rfid: &'a str) -> StoreFuture<'a, Option<Key>> {
        Box::pin(async move {
            Ok(self
                .keys
                .read()
                .await
                .iter()
                .find(|k| k.rfid == rfid)
                .cloned())
        })
    }

    fn insert_key<'a>(&'a self, key: &'a Key) -> StoreFuture<'a, Key> {
        Box::pin(insert_unique(&self.keys, key, "room_key.rfid", |k| {
            k.rfid == key.rfid
        }))
    }

    fn list_students(&self) -> StoreFuture<'_, Vec<Student>> {
        Box::pin(async move { Ok(self.students.read().await.clone()) })
    }

    fn find_student_by_rfid<'a>(&'a self, rfid: &'a str) -> StoreFuture<'a, Option<Student>> {
        Box::pin(async move {
            Ok(self
                .students
                .read()
                .await
                .iter()
                .find(|s| s.rfid == rfid)
                .cloned())
        })
    }

    fn insert_student<'a>(&'a self, student: &'a Student) -> StoreFuture<'a, Student> {
        Box::pin(insert_unique(
            &self.students,
            student,
            "student.rfid",
            |s| s.rfid == student.rfid,
        ))
    }

    fn list_instructors(&self) -> StoreFuture<'_, Vec<Instructor>> {
        Box::pin(async move { Ok(self.instructors.read().await.clone()) })
    }

    fn find_instructor_by_school_id<'a>(
        &'a self,
        school_id: &'a str,
    ) -> StoreFuture<'a, Option<Instructor>> {
        Box::pin(async move {
            Ok(self
                .instructors
                .read()
                .await
                .iter()
                .find(|i| i.school_id == school_id)
                .cloned())
        })
    }

    fn insert_instructor<'a>(
        &'a self,
        instructor: &'a Instructor,
    ) -> StoreFuture<'a, Instructor> {
        Box::pin(insert_unique(
            &self.instructors,
            instructor,
            "instructor.school_id",
            |i| i.school_id == instructor.school_id,
        ))
    }

    fn list_schedules(&self) -> StoreFuture<'_, Vec<Schedule>> {
        Box::pin(async move { Ok(self.schedules.read().await.clone()) })
    }

    fn find_active_schedules<'a>(
        &'a self,
        window: ScheduleWindow<'a>,
    ) -> StoreFuture<'a, Vec<Schedule>> {
        Box::pin(async move {
            let mut matches: Vec<Schedule> = self
                .schedules
                .read()
                .await
                .iter()
                .filter(|s| s.room_name == window.room_name && s.contains(window.at))
                .filter(|s| window.day_of_week.is_none_or(|day| s.day_of_week == day))
                .cloned()
                .collect();

            matches.sort_by_key(|s| (s.start_time, s.created_at, s.id));
            matches.truncate(usize::try_from(window.limit).unwrap_or(0));
            Ok(matches)
        })
    }

    fn insert_schedule<'a>(&'a self, schedule: &'a Schedule) -> StoreFuture<'a, Schedule> {
        Box::pin(async move {
            self.schedules.write().await.push(schedule.clone());
            Ok(schedule.clone())
        })
    }

    fn list_records(&self) -> StoreFuture<'_, Vec<Record>> {
        Box::pin(async move {
            // Newest insert first; the stable sort keeps that order for equal timestamps.
            let mut records: Vec<Record> = self.records.read().await.iter().rev().cloned().collect();
            records.sort_by_key(|r| Reverse(r.created_at));
            Ok(records)
        })
    }

    fn insert_record<'a>(&'a self, record: &'a Record) -> StoreFuture<'a, Record> {
        Box::pin(async move {
            self.records.write().await.push(record.clone());
            Ok(record.clone())
        })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
