use crate::core::time_math::{format_time, get_position_from_progress, get_progress};

/// Represents the current state of track playback progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackProgress {
    position_ms: f64,
    duration_ms: f64,
}

impl PlaybackProgress {
    /// Creates a new PlaybackProgress instance
    ///
    /// # Arguments
    /// * `position_ms` - The current playback offset
    /// * `duration_ms` - The total length of the track
    ///
    /// # Returns
    /// * `Some(PlaybackProgress)` if the duration is valid (> 0)
    /// * `None` if the duration is zero, negative or NaN
    pub fn new(position_ms: f64, duration_ms: f64) -> Option<Self> {
        if duration_ms.is_nan() || duration_ms <= 0.0 {
            return None;
        }

        Some(Self {
            position_ms: position_ms.clamp(0.0, duration_ms),
            duration_ms,
        })
    }

    /// Returns the ratio of progress (0.0 to 1.0)
    pub fn ratio(&self) -> f64 {
        get_progress(self.position_ms, self.duration_ms)
    }

    /// Moves the position to where a slider at `progress` points
    pub fn seek(&self, progress: f64) -> Self {
        Self {
            position_ms: get_position_from_progress(progress, self.duration_ms),
            duration_ms: self.duration_ms,
        }
    }

    pub fn position_ms(&self) -> f64 {
        self.position_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn remaining_ms(&self) -> f64 {
        self.duration_ms - self.position_ms
    }

    pub fn elapsed_text(&self) -> String {
        format_time(self.position_ms)
    }

    pub fn total_text(&self) -> String {
        format_time(self.duration_ms)
    }
}
