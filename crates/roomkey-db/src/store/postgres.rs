//! Postgres-backed entity store.
//!
//! Every operation checks a connection out of the bb8 pool for the duration of
//! a single statement. Inserts are single `INSERT ... RETURNING` statements, so
//! a row is either written with all of its fields or not at all.
//!
//! Each operation runs inside a `debug` span named after it, entered on every
//! poll of the returned future.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::{EntityStore, ScheduleWindow, StoreFuture, traced};
use crate::db::DbProvider;
use crate::db::connection::DbPool;
use crate::db::{query, schema};
use crate::model::{
    building::Building, instructor::Instructor, key::Key, record::Record, room::Room,
    schedule::Schedule, student::Student,
};

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl EntityStore for PgStore {
    fn list_buildings(&self) -> StoreFuture<'_, Vec<Building>> {
        traced(tracing::debug_span!("list_buildings"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::building::all().load::<Building>(&mut conn).await?)
        })
    }

    fn find_building_by_id(&self, id: uuid::Uuid) -> StoreFuture<'_, Option<Building>> {
        traced(tracing::debug_span!("find_building_by_id", %id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::building::by_id(id)
                .first::<Building>(&mut conn)
                .await
                .optional()?)
        })
    }

    fn find_building_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Building>> {
        traced(tracing::debug_span!("find_building_by_name", name), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::building::by_name(name)
                .first::<Building>(&mut conn)
                .await
                .optional()?)
        })
    }

    fn insert_building<'a>(&'a self, building: &'a Building) -> StoreFuture<'a, Building> {
        traced(tracing::debug_span!("insert_building", building_id = %building.id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(diesel::insert_into(schema::building::table)
                .values(building)
                .returning(Building::as_returning())
                .get_result(&mut conn)
                .await?)
        })
    }

    fn list_rooms(&self) -> StoreFuture<'_, Vec<Room>> {
        traced(tracing::debug_span!("list_rooms"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::room::all().load::<Room>(&mut conn).await?)
        })
    }

    fn find_room_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Room>> {
        traced(tracing::debug_span!("find_room_by_name", name), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::room::by_name(name)
                .first::<Room>(&mut conn)
                .await
                .optional()?)
        })
    }

    fn insert_room<'a>(&'a self, room: &'a Room) -> StoreFuture<'a, Room> {
        traced(tracing::debug_span!("insert_room", room_id = %room.id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(diesel::insert_into(schema::room::table)
                .values(room)
                .returning(Room::as_returning())
                .get_result(&mut conn)
                .await?)
        })
    }

    fn list_keys(&self) -> StoreFuture<'_, Vec<Key>> {
        traced(tracing::debug_span!("list_keys"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::key::all().load::<Key>(&mut conn).await?)
        })
    }

    fn find_key_by_rfid<'a>(&'a self, rfid: &'a str) -> StoreFuture<'a, Option<Key>> {
        traced(tracing::debug_span!("find_key_by_rfid", rfid), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::key::by_rfid(rfid)
                .first::<Key>(&mut conn)
                .await
                .optional()?)
        })
    }

    fn insert_key<'a>(&'a self, key: &'a Key) -> StoreFuture<'a, Key> {
        traced(tracing::debug_span!("insert_key", key_id = %key.id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(diesel::insert_into(schema::room_key::table)
                .values(key)
                .returning(Key::as_returning())
                .get_result(&mut conn)
                .await?)
        })
    }

    fn list_students(&self) -> StoreFuture<'_, Vec<Student>> {
        traced(tracing::debug_span!("list_students"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::student::all().load::<Student>(&mut conn).await?)
        })
    }

    fn find_student_by_rfid<'a>(&'a self, rfid: &'a str) -> StoreFuture<'a, Option<Student>> {
        traced(tracing::debug_span!("find_student_by_rfid"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::student::by_rfid(rfid)
                .first::<Student>(&mut conn)
                .await
                .optional()?)
        })
    }

    fn insert_student<'a>(&'a self, student: &'a Student) -> StoreFuture<'a, Student> {
        traced(tracing::debug_span!("insert_student", student_id = %student.id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(diesel::insert_into(schema::student::table)
                .values(student)
                .returning(Student::as_returning())
                .get_result(&mut conn)
                .await?)
        })
    }

    fn list_instructors(&self) -> StoreFuture<'_, Vec<Instructor>> {
        traced(tracing::debug_span!("list_instructors"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::instructor::all().load::<Instructor>(&mut conn).await?)
        })
    }

    fn find_instructor_by_school_id<'a>(
        &'a self,
        school_id: &'a str,
    ) -> StoreFuture<'a, Option<Instructor>> {
        traced(tracing::debug_span!("find_instructor_by_school_id", school_id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::instructor::by_school_id(school_id)
                .first::<Instructor>(&mut conn)
                .await
                .optional()?)
        })
    }

    fn insert_instructor<'a>(
        &'a self,
        instructor: &'a Instructor,
    ) -> StoreFuture<'a, Instructor> {
        let span = tracing::debug_span!("insert_instructor", instructor_id = %instructor.id);
        traced(span, async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(diesel::insert_into(schema::instructor::table)
                .values(instructor)
                .returning(Instructor::as_returning())
                .get_result(&mut conn)
                .await?)
        })
    }

    fn list_schedules(&self) -> StoreFuture<'_, Vec<Schedule>> {
        traced(tracing::debug_span!("list_schedules"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::schedule::all().load::<Schedule>(&mut conn).await?)
        })
    }

    fn find_active_schedules<'a>(
        &'a self,
        window: ScheduleWindow<'a>,
    ) -> StoreFuture<'a, Vec<Schedule>> {
        traced(
            tracing::debug_span!(
                "find_active_schedules",
                room_name = window.room_name,
                at = %window.at,
                day_of_week = ?window.day_of_week
            ),
            async move {
                let mut conn = self.pool.get_connection().await?;
                Ok(
                    query::schedule::active_at(window.at, window.room_name, window.day_of_week)
                        .limit(window.limit)
                        .load::<Schedule>(&mut conn)
                        .await?,
                )
            },
        )
    }

    fn insert_schedule<'a>(&'a self, schedule: &'a Schedule) -> StoreFuture<'a, Schedule> {
        traced(tracing::debug_span!("insert_schedule", schedule_id = %schedule.id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(diesel::insert_into(schema::schedule::table)
                .values(schedule)
                .returning(Schedule::as_returning())
                .get_result(&mut conn)
                .await?)
        })
    }

    fn list_records(&self) -> StoreFuture<'_, Vec<Record>> {
        traced(tracing::debug_span!("list_records"), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(query::record::newest_first()
                .load::<Record>(&mut conn)
                .await?)
        })
    }

    fn insert_record<'a>(&'a self, record: &'a Record) -> StoreFuture<'a, Record> {
        traced(tracing::debug_span!("insert_record", record_id = %record.id), async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(diesel::insert_into(schema::record::table)
                .values(record)
                .returning(Record::as_returning())
                .get_result(&mut conn)
                .await?)
        })
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
