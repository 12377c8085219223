pub mod playback_progress;
