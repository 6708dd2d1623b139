pub mod add_schedules;
pub mod denormalize;
pub mod entities;
pub mod errors;
pub mod find_schedules;
pub mod normalize;
pub mod offset;
pub mod timezone;

#[cfg(test)]
pub mod mocks;
