//! Shared configuration, errors, route constants and time sources for the
//! roomkey workspace.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
