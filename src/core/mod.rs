pub mod calendar;
pub mod day;
pub mod offdays;
pub mod targets;
pub mod week;
