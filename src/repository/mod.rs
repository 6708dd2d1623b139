pub mod errors;
pub mod schedule;
