use std::fmt;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use lofty::probe::Probe;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use log::debug;

use crate::core::time_math::format_time;
use crate::modules::lyrics::locator::find_lrc_file;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Length in whole milliseconds, `None` when the file could not be probed
    pub duration_ms: Option<u64>,
}

impl Track {
    pub fn from_path(path: &Path) -> Self {
        match Self::extract_metadata(path) {
            Ok(track) => track,
            Err(err) => {
                debug!("Falling back to file name for {}: {}", path.display(), err);
                Self::fallback(path)
            }
        }
    }

    /// Duration as the `f64` milliseconds the time math works with
    pub fn duration(&self) -> Option<f64> {
        self.duration_ms.map(|ms| ms as f64)
    }

    /// `MM:SS` label, or `--:--` when the length is unknown
    pub fn duration_label(&self) -> String {
        self.duration()
            .map(format_time)
            .unwrap_or_else(|| "--:--".to_string())
    }

    /// The `.lrc` file holding this track's lyrics, if one sits next to it
    pub fn lyrics_path(&self) -> Option<PathBuf> {
        find_lrc_file(&self.path)
    }

    fn extract_metadata(path: &Path) -> anyhow::Result<Self> {
        let tagged_file = Probe::open(path)?.read()?;
        let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());
        let title = tag.and_then(|t| t.title().map(|s| s.into_owned()))
            .unwrap_or_else(|| Self::extract_filename(path));
        let artist = tag.and_then(|t| t.artist().map(|s| s.into_owned()));
        let album = tag.and_then(|t| t.album().map(|s| s.into_owned()));
        let duration_ms = u64::try_from(tagged_file.properties().duration().as_millis()).ok();

        Ok(Track {
            path: path.to_path_buf(),
            title,
            artist,
            album,
            duration_ms,
        })
    }

    fn fallback(path: &Path) -> Self {
        Track {
            path: path.to_path_buf(),
            title: Self::extract_filename(path),
            artist: None,
            album: None,
            duration_ms: None,
        }
    }

    fn extract_filename(path: &Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Unknown")
            .to_string()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} [{}]",
            self.artist.as_deref().unwrap_or("Unknown Artist"),
            self.title,
            self.duration_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_track(artist: Option<&str>, duration_ms: Option<u64>) -> Track {
        Track {
            path: PathBuf::from("music/Time.flac"),
            title: "Time".to_owned(),
            artist: artist.map(str::to_owned),
            album: None,
            duration_ms,
        }
    }

    #[test]
    fn display_includes_artist_title_and_length() {
        let track = make_track(Some("Pink Floyd"), Some(413_000));
        assert_eq!(track.to_string(), "Pink Floyd - Time [06:53]");
    }

    #[test]
    fn display_marks_unknown_artist_and_length() {
        let track = make_track(None, None);
        assert_eq!(track.to_string(), "Unknown Artist - Time [--:--]");
    }

    #[test]
    fn zero_length_uses_zero_label_not_placeholder() {
        let track = make_track(None, Some(0));
        assert_eq!(track.duration_label(), "00:00");
    }

    #[test]
    fn unreadable_file_falls_back_to_stem() {
        let track = Track::from_path(Path::new("/nonexistent/dir/Echoes.mp3"));
        assert_eq!(track.title, "Echoes");
        assert_eq!(track.duration_ms, None);
        assert_eq!(track.artist, None);
    }

    #[test]
    fn lyrics_path_finds_sibling_lrc() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("Time.mp3");
        std::fs::write(&audio, b"not audio").unwrap();
        std::fs::write(dir.path().join("Time.lrc"), b"[00:01.00]Ticking away").unwrap();

        let track = Track::from_path(&audio);
        assert_eq!(track.lyrics_path(), Some(dir.path().join("Time.lrc")));
    }

    #[test]
    fn lyrics_path_is_none_without_lrc() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("Time.mp3");
        std::fs::write(&audio, b"not audio").unwrap();

        assert_eq!(Track::from_path(&audio).lyrics_path(), None);
    }
}
