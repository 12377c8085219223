pub mod library;
pub mod lyrics;
pub mod playback;
pub mod ui;
