use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::modules::ui::progress_formatter::LabelStyle;
use crate::utils::APP_NAME;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Playback time formatting and progress math", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format milliseconds as MM:SS
    Format {
        /// Time in milliseconds
        #[arg(allow_negative_numbers = true)]
        milliseconds: f64,
    },

    /// Convert a position into a progress ratio (0-1)
    Progress {
        /// Current position in milliseconds
        #[arg(allow_negative_numbers = true)]
        position: f64,
        /// Total duration in milliseconds
        #[arg(allow_negative_numbers = true)]
        duration: f64,
    },

    /// Convert a progress ratio (0-1) back into a position in milliseconds
    Seek {
        /// Slider progress ratio
        #[arg(allow_negative_numbers = true)]
        progress: f64,
        /// Total duration in milliseconds
        #[arg(allow_negative_numbers = true)]
        duration: f64,
    },

    /// Render a progress bar and label for a position
    Label {
        /// Current position in milliseconds
        #[arg(allow_negative_numbers = true)]
        position: f64,
        /// Total duration in milliseconds
        #[arg(allow_negative_numbers = true)]
        duration: f64,
        /// Label layout (defaults to the configured style)
        #[arg(long, value_enum)]
        style: Option<LabelStyle>,
    },

    /// Show the length of an audio file
    Inspect {
        /// Path to the audio file
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every audio file under a directory with its length
    List {
        /// Path to the music directory
        directory: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the timed lyrics of an audio file
    Lyrics {
        /// Path to the audio file
        file: PathBuf,
        /// Only show the line playing at this position (milliseconds)
        #[arg(long, allow_negative_numbers = true)]
        at: Option<f64>,
    },

    /// Show or change settings
    Config {
        /// Default label layout
        #[arg(long, value_enum)]
        style: Option<LabelStyle>,
        /// Progress bar width in cells
        #[arg(long)]
        bar_width: Option<usize>,
        /// Print JSON by default
        #[arg(long)]
        json: Option<bool>,
    },
}
