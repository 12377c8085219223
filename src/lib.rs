pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod core;
pub mod modules;
pub mod utils;

pub use crate::core::time_math::{
    ZERO_TIME, format_time, format_time_opt, get_position_from_progress, get_progress,
};
