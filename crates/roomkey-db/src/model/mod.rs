pub mod building;
pub mod instructor;
pub mod key;
pub mod record;
pub mod room;
pub mod schedule;
pub mod student;
