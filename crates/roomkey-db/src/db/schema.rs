// Hand-maintained to match `migrations/`; column order mirrors the model structs.

diesel::table! {
    building (id) {
        id -> Uuid,
        name -> Text,
        abbrv -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    room (id) {
        id -> Uuid,
        name -> Text,
        floor -> Int4,
        building_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    room_key (id) {
        id -> Uuid,
        rfid -> Text,
        status -> Text,
        building_id -> Uuid,
        room_id -> Uuid,
        room_name -> Text,
        room_floor -> Int4,
        building_name -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    student (id) {
        id -> Uuid,
        first_name -> Text,
        last_name -> Text,
        school_id -> Text,
        rfid -> Text,
        college -> Text,
        course -> Text,
        section -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    instructor (id) {
        id -> Uuid,
        first_name -> Text,
        last_name -> Text,
        school_id -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    schedule (id) {
        id -> Uuid,
        start_time -> Timestamptz,
        end_time -> Timestamptz,
        day_of_week -> Int2,
        room_name -> Text,
        instructor_name -> Text,
        subject -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    record (id) {
        id -> Uuid,
        student_id -> Uuid,
        schedule_id -> Uuid,
        student_name -> Text,
        section -> Text,
        room_name -> Text,
        subject -> Text,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(room -> building (building_id));
diesel::joinable!(room_key -> room (room_id));
diesel::joinable!(room_key -> building (building_id));

diesel::allow_tables_to_appear_in_same_query!(
    building, room, room_key, student, instructor, schedule, record,
);
