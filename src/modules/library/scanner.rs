use crate::core::models::Track;
use crate::utils::SUPPORTED_EXTENSIONS;
use anyhow::{Result, bail};
use log::warn;
use std::path::Path;
use walkdir::WalkDir;

pub fn scan_directory(root: &Path) -> Result<Vec<Track>> {
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut tracks: Vec<Track> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.path().is_file() && is_audio_file(e.path()))
        .map(|entry| Track::from_path(entry.path()))
        .collect();

    tracks.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(tracks)
}

/// Sum of every known track length, in milliseconds
pub fn total_duration_ms(tracks: &[Track]) -> u64 {
    tracks.iter().filter_map(|t| t.duration_ms).sum()
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn track(name: &str, duration_ms: Option<u64>) -> Track {
        Track {
            path: PathBuf::from(name),
            title: name.to_owned(),
            artist: None,
            album: None,
            duration_ms,
        }
    }

    #[test]
    fn audio_extensions_match_case_insensitively() {
        assert!(is_audio_file(Path::new("a/Song.MP3")));
        assert!(is_audio_file(Path::new("b.flac")));
        assert!(is_audio_file(Path::new("c.Ogg")));
        assert!(!is_audio_file(Path::new("cover.jpg")));
        assert!(!is_audio_file(Path::new("README")));
    }

    #[test]
    fn total_duration_skips_unknown_lengths() {
        let tracks = vec![track("a", Some(61_000)), track("b", None), track("c", Some(4_000))];
        assert_eq!(total_duration_ms(&tracks), 65_000);
        assert_eq!(total_duration_ms(&[]), 0);
    }

    #[test]
    fn scan_rejects_missing_directory() {
        assert!(scan_directory(Path::new("/nonexistent/track-time/library")).is_err());
    }

    #[test]
    fn scan_collects_only_audio_files_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let nested = root.join("disc2");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("b.mp3"), b"not really audio").unwrap();
        fs::write(root.join("a.wav"), b"not really audio").unwrap();
        fs::write(root.join("notes.txt"), b"skip me").unwrap();
        fs::write(root.join("a.lrc"), b"[00:01.00]skip me too").unwrap();
        fs::write(nested.join("c.flac"), b"not really audio").unwrap();

        let tracks = scan_directory(root).unwrap();
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert!(tracks.iter().all(|t| t.duration_ms.is_none()));
    }
}
