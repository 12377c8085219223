use crate::cli_handlers::CliCommand;
use crate::core::models::Track;
use crate::core::time_math::format_time;
use crate::modules::lyrics::lrc::{Lyrics, format_lrc_time};
use crate::modules::ui::terminal::renderer::TerminalRenderer;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct LyricsCommand {
    pub file: PathBuf,
    pub at: Option<f64>,
}

/// Every timed line, or only the line playing at `at` milliseconds
pub fn lyrics_output(lyrics: &Lyrics, at: Option<f64>) -> String {
    match at {
        Some(position) => match lyrics.line_at(position) {
            Some(line) => format!("{} {}", format_time(position), line.text),
            None => format!("{} ...", format_time(position)),
        },
        None => lyrics
            .lines()
            .iter()
            .map(|line| format!("[{}] {}", format_lrc_time(line.timestamp_ms), line.text))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

impl CliCommand for LyricsCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        if !self.file.is_file() {
            anyhow::bail!("File not found: {}", self.file.display());
        }

        let track = Track::from_path(&self.file);
        let lrc_path = track
            .lyrics_path()
            .with_context(|| format!("No lyrics file found for {}", self.file.display()))?;
        let lyrics = Lyrics::load(&lrc_path)?;
        let ui = TerminalRenderer::new();

        if lyrics.is_empty() {
            ui.print_error(&format!("No timed lines in {}", lrc_path.display()));
            return Ok(());
        }

        ui.print_message(&lyrics_output(&lyrics, self.at));

        Ok(())
    }
}
