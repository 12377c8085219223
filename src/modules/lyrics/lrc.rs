//! Timed lyrics in the LRC format: `[mm:ss.xx]text`.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// A line that has one or more leading time tags followed by its text
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[\d{1,2}:\d{2}(?:\.\d{1,3})?\])+(.*)$").expect("valid LRC line pattern")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{1,2}):(\d{2})(?:\.(\d{1,3}))?\]").expect("valid LRC tag pattern")
});

/// One lyric line and the moment it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    pub timestamp_ms: u64,
    pub text: String,
}

/// Lyric lines sorted by start time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lyrics {
    lines: Vec<LyricLine>,
}

impl Lyrics {
    /// Parses LRC text.
    ///
    /// A line with several tags yields one entry per tag. Metadata tags such as
    /// `[ar:Artist]`, untagged lines and tags without text are skipped.
    pub fn parse(content: &str) -> Self {
        let mut lines: Vec<LyricLine> = content
            .lines()
            .map(str::trim)
            .filter_map(|line| {
                let text = LINE_RE.captures(line)?.get(1)?;
                Some((&line[..text.start()], text.as_str().trim()))
            })
            .filter(|(_, text)| !text.is_empty())
            .flat_map(|(tags, text)| {
                TAG_RE.captures_iter(tags).map(move |tag| LyricLine {
                    timestamp_ms: tag_to_ms(&tag),
                    text: text.to_string(),
                })
            })
            .collect();

        lines.sort_by_key(|line| line.timestamp_ms);
        Self { lines }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lyrics {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the line being sung at `position_ms`: the last line whose
    /// timestamp is not after the position.
    ///
    /// `None` before the first line, for NaN positions and for empty lyrics.
    pub fn index_at(&self, position_ms: f64) -> Option<usize> {
        let after = self
            .lines
            .partition_point(|line| line.timestamp_ms as f64 <= position_ms);
        after.checked_sub(1)
    }

    pub fn line_at(&self, position_ms: f64) -> Option<&LyricLine> {
        self.index_at(position_ms).map(|index| &self.lines[index])
    }
}

/// Formats milliseconds as an LRC tag body, `mm:ss.xx` (centiseconds)
pub fn format_lrc_time(ms: u64) -> String {
    let total_cs = ms / 10;
    let cs = total_cs % 100;
    let total_s = total_cs / 100;
    format!("{:02}:{:02}.{:02}", total_s / 60, total_s % 60, cs)
}

// Three fraction digits are milliseconds, one or two are hundredths.
fn tag_to_ms(tag: &regex::Captures<'_>) -> u64 {
    let number = |i: usize| tag.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
    let minutes = number(1).unwrap_or(0);
    let seconds = number(2).unwrap_or(0);
    let base = (minutes * 60 + seconds) * 1000;

    match tag.get(3) {
        Some(fraction) if fraction.as_str().len() == 3 => base + number(3).unwrap_or(0),
        Some(_) => base + number(3).unwrap_or(0) * 10,
        None => base,
    }
}
