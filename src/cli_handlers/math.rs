use crate::cli_handlers::CliCommand;
use crate::core::time_math::{format_time, get_position_from_progress, get_progress};
use crate::modules::ui::terminal::renderer::TerminalRenderer;
use anyhow::Result;

pub fn format_output(milliseconds: f64) -> String {
    format_time(milliseconds)
}

pub fn progress_output(position: f64, duration: f64) -> String {
    get_progress(position, duration).to_string()
}

pub fn seek_output(progress: f64, duration: f64) -> String {
    get_position_from_progress(progress, duration).to_string()
}

// ── Format ────────────────────────────────────────────────────────────────────
pub struct FormatCommand {
    pub milliseconds: f64,
}

impl CliCommand for FormatCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        TerminalRenderer::new().print_message(&format_output(self.milliseconds));
        Ok(())
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────
pub struct ProgressCommand {
    pub position: f64,
    pub duration: f64,
}

impl CliCommand for ProgressCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        TerminalRenderer::new().print_message(&progress_output(self.position, self.duration));
        Ok(())
    }
}

// ── Seek ──────────────────────────────────────────────────────────────────────
pub struct SeekCommand {
    pub progress: f64,
    pub duration: f64,
}

impl CliCommand for SeekCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        TerminalRenderer::new().print_message(&seek_output(self.progress, self.duration));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_prints_clock_or_zero() {
        assert_eq!(format_output(7_384_000.0), "123:04");
        assert_eq!(format_output(-5.0), "00:00");
    }

    #[test]
    fn progress_prints_plain_ratio() {
        assert_eq!(progress_output(50.0, 100.0), "0.5");
        assert_eq!(progress_output(150.0, 100.0), "1");
        assert_eq!(progress_output(50.0, 0.0), "0");
    }

    #[test]
    fn seek_prints_clamped_position() {
        assert_eq!(seek_output(0.5, 100.0), "50");
        assert_eq!(seek_output(1.5, 100.0), "100");
        assert_eq!(seek_output(0.5, -1.0), "0");
        assert_eq!(seek_output(0.25, 190_001.0), "47500.25");
    }
}
