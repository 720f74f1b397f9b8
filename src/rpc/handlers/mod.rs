pub mod permissions;
pub mod schedule;
