use crate::cli_handlers::CliCommand;
use crate::config::Config;
use crate::modules::playback::playback_progress::PlaybackProgress;
use crate::modules::ui::progress_formatter::{LabelStyle, ProgressFormatter};
use crate::modules::ui::terminal::renderer::{TerminalRenderer, progress_line};
use anyhow::Result;

pub struct LabelCommand {
    pub position: f64,
    pub duration: f64,
    pub style: Option<LabelStyle>,
}

/// Bar and label for a position; an unusable duration renders an empty bar over zero times
pub fn label_output(position: f64, duration: f64, style: LabelStyle, bar_width: usize) -> String {
    let formatter = ProgressFormatter::for_style(style);

    match PlaybackProgress::new(position, duration) {
        Some(progress) => progress_line(progress.ratio(), bar_width, &formatter.format(&progress)),
        None => progress_line(0.0, bar_width, &formatter.format_idle()),
    }
}

impl CliCommand for LabelCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let config = Config::load()?;
        let style = self.style.unwrap_or(config.label_style);

        TerminalRenderer::new().print_message(&label_output(
            self.position,
            self.duration,
            style,
            config.bar_width,
        ));

        Ok(())
    }
}
