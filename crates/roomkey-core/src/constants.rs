/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";

pub const RECORD_ROUTE_COMPONENT: &str = "record";
pub const RECORD_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RECORD_ROUTE_COMPONENT);

pub const BUILDING_ROUTE_COMPONENT: &str = "building";
pub const BUILDING_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", BUILDING_ROUTE_COMPONENT);

pub const ROOM_ROUTE_COMPONENT: &str = "room";
pub const ROOM_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", ROOM_ROUTE_COMPONENT);

pub const KEY_ROUTE_COMPONENT: &str = "key";
pub const KEY_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", KEY_ROUTE_COMPONENT);

pub const STUDENT_ROUTE_COMPONENT: &str = "student";
pub const STUDENT_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", STUDENT_ROUTE_COMPONENT);

pub const INSTRUCTOR_ROUTE_COMPONENT: &str = "instructor";
pub const INSTRUCTOR_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", INSTRUCTOR_ROUTE_COMPONENT);

pub const SCHEDULE_ROUTE_COMPONENT: &str = "schedule";
pub const SCHEDULE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", SCHEDULE_ROUTE_COMPONENT);
