use crate::cli_handlers::CliCommand;
use crate::config::Config;
use crate::core::models::Track;
use crate::modules::library::scanner::scan_directory;
use crate::modules::ui::terminal::renderer::{TerminalRenderer, to_json, track_list_lines};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct ListCommand {
    pub directory: PathBuf,
    pub json: bool,
}

pub fn list_output(tracks: &[Track], json: bool) -> Result<String> {
    if json {
        return to_json(tracks);
    }
    Ok(track_list_lines(tracks).join("\n"))
}

impl CliCommand for ListCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let tracks = scan_directory(&self.directory)
            .with_context(|| format!("Failed to scan {}", self.directory.display()))?;
        let config = Config::load()?;
        let json = self.json || config.json;
        let ui = TerminalRenderer::new();

        if tracks.is_empty() && !json {
            ui.print_error(&format!("No audio files found in {}", self.directory.display()));
            return Ok(());
        }

        ui.print_message(&list_output(&tracks, json)?);

        Ok(())
    }
}
