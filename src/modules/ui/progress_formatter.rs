use serde::{Deserialize, Serialize};

use crate::core::time_math::{ZERO_TIME, format_time};
use crate::modules::playback::playback_progress::PlaybackProgress;

/// Formats milliseconds in a compact form (e.g., "3:45" instead of "03:45")
pub fn format_time_compact(milliseconds: f64) -> String {
    let padded = format_time(milliseconds);
    match padded.strip_prefix('0') {
        Some(rest) if !rest.starts_with(':') => rest.to_string(),
        _ => padded,
    }
}

/// Converts a progress ratio to a whole percentage (0-100)
pub fn percentage(ratio: f64) -> u8 {
    if ratio.is_nan() {
        return 0;
    }
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Widest progress bar, in cells, that will be rendered
pub const MAX_BAR_WIDTH: usize = 500;

/// Renders a fixed-width text bar, e.g. "█████░░░░░" for half progress
///
/// Widths above [`MAX_BAR_WIDTH`] are cut down to it.
pub fn render_bar(ratio: f64, width: usize) -> String {
    let width = width.min(MAX_BAR_WIDTH);
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    // Each cell is a 3-byte UTF-8 character
    let mut bar = String::with_capacity(width.saturating_mul(3));
    bar.extend(std::iter::repeat_n('█', filled));
    bar.extend(std::iter::repeat_n('░', width - filled));
    bar
}

/// Which label layout a progress line uses
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    #[default]
    Default,
    Compact,
    Percentage,
}

/// Represents formatted progress information ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedProgress {
    pub elapsed_text: String,
    pub total_text: String,
    pub combined_label: String,
    pub percentage: u8,
}

/// Strategy pattern for different progress label formats
pub trait ProgressLabelFormatter {
    fn format(&self, elapsed_ms: f64, total_ms: f64, percentage: u8) -> String;
}

/// Default formatter: "00:34 / 03:10"
pub struct DefaultProgressFormatter;

impl ProgressLabelFormatter for DefaultProgressFormatter {
    fn format(&self, elapsed_ms: f64, total_ms: f64, _percentage: u8) -> String {
        format!("{} / {}", format_time(elapsed_ms), format_time(total_ms))
    }
}

/// Compact formatter: "0:34/3:10"
pub struct CompactProgressFormatter;

impl ProgressLabelFormatter for CompactProgressFormatter {
    fn format(&self, elapsed_ms: f64, total_ms: f64, _percentage: u8) -> String {
        format!(
            "{}/{}",
            format_time_compact(elapsed_ms),
            format_time_compact(total_ms)
        )
    }
}

/// Percentage formatter: "18% (00:34/03:10)"
pub struct PercentageProgressFormatter;

impl ProgressLabelFormatter for PercentageProgressFormatter {
    fn format(&self, elapsed_ms: f64, total_ms: f64, percentage: u8) -> String {
        format!(
            "{}% ({}/{})",
            percentage,
            format_time(elapsed_ms),
            format_time(total_ms)
        )
    }
}

impl ProgressLabelFormatter for LabelStyle {
    fn format(&self, elapsed_ms: f64, total_ms: f64, percentage: u8) -> String {
        match self {
            LabelStyle::Default => DefaultProgressFormatter.format(elapsed_ms, total_ms, percentage),
            LabelStyle::Compact => CompactProgressFormatter.format(elapsed_ms, total_ms, percentage),
            LabelStyle::Percentage => {
                PercentageProgressFormatter.format(elapsed_ms, total_ms, percentage)
            }
        }
    }
}

/// Factory for creating formatted progress information
pub struct ProgressFormatter<F: ProgressLabelFormatter> {
    label_formatter: F,
}

impl<F: ProgressLabelFormatter> ProgressFormatter<F> {
    pub fn new(label_formatter: F) -> Self {
        Self { label_formatter }
    }

    pub fn format(&self, progress: &PlaybackProgress) -> FormattedProgress {
        let elapsed = progress.position_ms();
        let total = progress.duration_ms();
        let percentage = percentage(progress.ratio());

        FormattedProgress {
            elapsed_text: progress.elapsed_text(),
            total_text: progress.total_text(),
            combined_label: self.label_formatter.format(elapsed, total, percentage),
            percentage,
        }
    }

    /// Label for when nothing with a usable duration is loaded
    pub fn format_idle(&self) -> FormattedProgress {
        FormattedProgress {
            elapsed_text: ZERO_TIME.to_string(),
            total_text: ZERO_TIME.to_string(),
            combined_label: self.label_formatter.format(0.0, 0.0, 0),
            percentage: 0,
        }
    }
}

// Convenience constructors
impl ProgressFormatter<DefaultProgressFormatter> {
    pub fn default_formatter() -> Self {
        Self::new(DefaultProgressFormatter)
    }
}

impl ProgressFormatter<LabelStyle> {
    /// Formatter picked at runtime, e.g. from the config file
    pub fn for_style(style: LabelStyle) -> Self {
        Self::new(style)
    }
}
