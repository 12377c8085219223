pub mod models;
pub mod time_math;
