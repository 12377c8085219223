use crate::cli_handlers::CliCommand;
use crate::config::Config;
use crate::core::models::Track;
use crate::modules::ui::terminal::renderer::{TerminalRenderer, to_json};
use anyhow::Result;
use std::path::PathBuf;

pub struct InspectCommand {
    pub file: PathBuf,
    pub json: bool,
}

/// The track line, with a note when a lyrics file was found
pub fn inspect_output(track: &Track, json: bool) -> Result<String> {
    if json {
        return to_json(track);
    }

    Ok(match track.lyrics_path() {
        Some(lyrics) => format!("{}\nLyrics: {}", track, lyrics.display()),
        None => track.to_string(),
    })
}

impl CliCommand for InspectCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        if !self.file.is_file() {
            anyhow::bail!("File not found: {}", self.file.display());
        }

        let config = Config::load()?;
        let track = Track::from_path(&self.file);

        TerminalRenderer::new().print_message(&inspect_output(&track, self.json || config.json)?);

        Ok(())
    }
}
