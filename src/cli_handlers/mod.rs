mod config;
mod inspect;
mod label;
mod list;
mod lyrics;
mod math;

pub use config::ConfigCommand;
pub use inspect::InspectCommand;
pub use label::LabelCommand;
pub use list::ListCommand;
pub use lyrics::LyricsCommand;
pub use math::{FormatCommand, ProgressCommand, SeekCommand};

use crate::cli::Commands;
use anyhow::Result;

/// Every CLI command implements this trait.
///
/// Commands own their arguments and are consumed on execution, so they run exactly once.
pub trait CliCommand {
    fn execute(self: Box<Self>) -> Result<()>;
}

/// Converts a parsed [`Commands`] variant into a boxed [`CliCommand`] ready to execute.
pub fn from_cli(cmd: Commands) -> Box<dyn CliCommand> {
    match cmd {
        Commands::Format { milliseconds } => Box::new(FormatCommand { milliseconds }),
        Commands::Progress { position, duration } => Box::new(ProgressCommand { position, duration }),
        Commands::Seek { progress, duration } => Box::new(SeekCommand { progress, duration }),
        Commands::Label { position, duration, style } => {
            Box::new(LabelCommand { position, duration, style })
        }
        Commands::Inspect { file, json } => Box::new(InspectCommand { file, json }),
        Commands::List { directory, json } => Box::new(ListCommand { directory, json }),
        Commands::Lyrics { file, at } => Box::new(LyricsCommand { file, at }),
        Commands::Config { style, bar_width, json } => {
            Box::new(ConfigCommand { style, bar_width, json })
        }
    }
}
