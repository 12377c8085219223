use crate::core::models::Track;
use crate::core::time_math::format_time;
use crate::modules::library::scanner::total_duration_ms;
use crate::modules::ui::progress_formatter::{FormattedProgress, render_bar};
use anyhow::Result;
use serde::Serialize;

pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn print_message(&self, message: &str) {
        println!("{}", message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty-printed JSON for `--json` output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// "[█████░░░░░] 01:35 / 03:10"
pub fn progress_line(ratio: f64, bar_width: usize, formatted: &FormattedProgress) -> String {
    format!("[{}] {}", render_bar(ratio, bar_width), formatted.combined_label)
}

/// Numbered track lines followed by a count and total length
pub fn track_list_lines(tracks: &[Track]) -> Vec<String> {
    let total = tracks.len();
    let mut lines: Vec<String> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| format!("[{}/{}] {}", index + 1, total, track))
        .collect();

    lines.push(format!(
        "{} tracks, total {}",
        total,
        format_time(total_duration_ms(tracks) as f64)
    ));
    lines
}
