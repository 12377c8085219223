use crate::modules::ui::progress_formatter::{LabelStyle, MAX_BAR_WIDTH};
use crate::utils::APP_NAME;
use anyhow::{Context, Result, ensure};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub label_style: LabelStyle,

    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Print track details as JSON instead of text
    #[serde(default)]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label_style: LabelStyle::default(),
            bar_width: default_bar_width(),
            json: false,
        }
    }
}

fn default_bar_width() -> usize {
    30
}

impl Config {
    /// Location of the settings file, `<config_dir>/track-time/config.toml`
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(dir.join(APP_NAME).join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Rejects settings the renderer cannot honor
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_BAR_WIDTH).contains(&self.bar_width),
            "bar_width must be between 1 and {}, got {}",
            MAX_BAR_WIDTH,
            self.bar_width
        );
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bar_width, 30);
        assert_eq!(config.label_style, LabelStyle::Default);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("label_style = \"percentage\"").unwrap();
        assert_eq!(config.label_style, LabelStyle::Percentage);
        assert_eq!(config.bar_width, 30);
        assert!(!config.json);
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("track-time").join("config.toml");
        let config = Config {
            label_style: LabelStyle::Compact,
            bar_width: 12,
            json: true,
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "bar_width = \"wide\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    // ── bar_width bounds ──────────────────────────────────────────────────────

    #[test]
    fn bar_width_outside_range_is_rejected() {
        let zero = Config { bar_width: 0, ..Config::default() };
        let huge = Config { bar_width: usize::MAX, ..Config::default() };
        let widest = Config { bar_width: MAX_BAR_WIDTH, ..Config::default() };

        assert!(zero.validate().is_err());
        assert!(huge.validate().is_err());
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn oversized_bar_width_in_file_fails_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, format!("bar_width = {}", MAX_BAR_WIDTH + 1)).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("bar_width must be between"));
    }

    #[test]
    fn oversized_bar_width_is_not_saved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config { bar_width: 1_000_000, ..Config::default() };

        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }
}
