mod core;
pub mod schedules;

pub use self::core::{Client, Error, Response};
pub use schedules::HttpScheduleApi;
