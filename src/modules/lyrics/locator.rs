use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Score a differently-named `.lrc` file must reach to be picked
const MATCH_THRESHOLD: f64 = 60.0;

/// Words that say nothing about which song a file holds
const NOISE_WORDS: &[&str] = &[
    "lyrics", "lrc", "karaoke", "vocal", "instrumental", "remix", "edit", "version",
];

/// Finds the lyrics file for an audio file.
///
/// `<dir>/<stem>.lrc` wins when it exists. Otherwise every `.lrc` in the same
/// directory is scored against the audio file name and the best one at or
/// above the match threshold is returned.
pub fn find_lrc_file(audio_path: &Path) -> Option<PathBuf> {
    let stem = audio_path.file_stem()?.to_str()?;
    let exact = audio_path.with_extension("lrc");
    if exact.is_file() {
        return Some(exact);
    }

    let dir = match audio_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let best = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_lrc_file(e.path()))
        .filter_map(|entry| {
            let lrc_stem = entry.path().file_stem()?.to_str()?.to_string();
            let score = match_score(stem, &lrc_stem);
            (score >= MATCH_THRESHOLD).then(|| (score, entry.into_path()))
        })
        .max_by(|a, b| a.0.total_cmp(&b.0));

    match &best {
        Some((score, path)) => debug!("Lyrics for {}: {} (score {:.1})", stem, path.display(), score),
        None => debug!("No lyrics file matches {}", stem),
    }

    best.map(|(_, path)| path)
}

/// Similarity of two file stems on a 0-100 scale.
///
/// Identical normalized names score 100, containment scores 75-95, and
/// anything else is rated by shared characters (at most 60).
pub fn match_score(audio_name: &str, lrc_name: &str) -> f64 {
    let audio = normalize_name(audio_name);
    let lrc = normalize_name(lrc_name);

    if audio.is_empty() || lrc.is_empty() {
        return 0.0;
    }
    if audio == lrc {
        return 100.0;
    }

    let audio_len = audio.chars().count() as f64;
    let lrc_len = lrc.chars().count() as f64;

    if lrc.contains(&audio) {
        return 80.0 + audio_len / lrc_len * 15.0;
    }
    if audio.contains(&lrc) {
        return 75.0 + lrc_len / audio_len * 10.0;
    }

    let common = audio.chars().filter(|c| lrc.contains(*c)).count() as f64;
    common / audio_len.max(lrc_len) * 60.0
}

/// Lowercases, drops punctuation and whitespace, and strips noise words
fn normalize_name(name: &str) -> String {
    let mut cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    for word in NOISE_WORDS {
        cleaned = cleaned.replace(word, "");
    }
    cleaned
}

fn is_lrc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("lrc"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // ── Scoring ───────────────────────────────────────────────────────────────

    #[test]
    fn normalization_ignores_case_punctuation_and_noise() {
        assert_eq!(normalize_name("Time (Lyrics) - Remix"), "time");
        assert_eq!(match_score("Pink Floyd - Time", "pink_floyd.time"), 100.0);
    }

    #[test]
    fn containment_scores_above_threshold() {
        // "time" inside "pinkfloydtime": 80 + 4/13 * 15
        let score = match_score("Time", "Pink Floyd - Time");
        assert!((score - (80.0 + 4.0 / 13.0 * 15.0)).abs() < 1e-9);

        // "time" inside "01time": 75 + 4/6 * 10
        let score = match_score("01 Time", "Time");
        assert!((score - (75.0 + 4.0 / 6.0 * 10.0)).abs() < 1e-9);
    }

    #[test]
    fn unrelated_names_stay_below_threshold() {
        assert!(match_score("Money", "Breathe") < MATCH_THRESHOLD);
        assert_eq!(match_score("Lyrics", "Time"), 0.0);
    }

    // ── File lookup ───────────────────────────────────────────────────────────

    #[test]
    fn exact_sibling_is_preferred() {
        let dir = tempdir().unwrap();
        let audio = dir.path().join("Time.flac");
        fs::write(&audio, b"audio").unwrap();
        fs::write(dir.path().join("Time.lrc"), b"[00:01.00]a").unwrap();
        fs::write(dir.path().join("Pink Floyd - Time.lrc"), b"[00:01.00]b").unwrap();

        assert_eq!(find_lrc_file(&audio), Some(dir.path().join("Time.lrc")));
    }

    #[test]
    fn falls_back_to_best_scoring_file() {
        let dir = tempdir().unwrap();
        let audio = dir.path().join("Time.mp3");
        fs::write(&audio, b"audio").unwrap();
        fs::write(dir.path().join("Pink Floyd - Time (lyrics).lrc"), b"").unwrap();
        fs::write(dir.path().join("Money.lrc"), b"").unwrap();

        assert_eq!(
            find_lrc_file(&audio),
            Some(dir.path().join("Pink Floyd - Time (lyrics).lrc"))
        );
    }

    #[test]
    fn no_match_when_nothing_is_close() {
        let dir = tempdir().unwrap();
        let audio = dir.path().join("Time.mp3");
        fs::write(&audio, b"audio").unwrap();
        fs::write(dir.path().join("Money.lrc"), b"").unwrap();
        fs::write(dir.path().join("Time.txt"), b"").unwrap();

        assert_eq!(find_lrc_file(&audio), None);
    }
}
