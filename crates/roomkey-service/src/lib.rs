//! Business operations: badge-read record creation and the directory of
//! buildings, rooms, keys, students, instructors and schedules.

pub mod directory;
pub mod error;
pub mod record;
mod validate;
