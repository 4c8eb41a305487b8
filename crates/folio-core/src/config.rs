//! Configuration management for folio.
//!
//! Loads configuration from ${FOLIO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::carousel::WrapMode;
use crate::typewriter::TypingSequence;
use crate::viewport::{Breakpoint, default_breakpoints};

pub mod paths {
    //! Path resolution for folio configuration and log directories.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)
    //! 3. ./.folio when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the folio home directory.
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".folio"),
            |h| h.join(".config").join("folio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        folio_home().join("logs")
    }
}

/// Hero typewriter timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Delay between characters while typing.
    pub typing_speed_ms: u64,
    /// Hold time after a role is fully typed.
    pub pause_ms: u64,
    /// Cursor blink cadence.
    pub cursor_blink_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 120,
            pause_ms: 1000,
            cursor_blink_ms: 500,
        }
    }
}

impl TypewriterConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }

    /// Builds a typing sequence for `roles` with these timings.
    ///
    /// # Errors
    /// Returns an error if `roles` is empty or a delay is zero.
    pub fn sequence(&self, roles: &[String]) -> Result<TypingSequence> {
        TypingSequence::new(roles.to_vec(), self.typing_speed(), self.pause())
    }
}

/// Projects carousel behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Start with autoplay on.
    pub autoplay: bool,
    /// Autoplay interval.
    pub interval_ms: u64,
    /// Wrap around at the ends instead of clamping.
    pub looping: bool,
    /// Pause autoplay while the mouse is over the carousel.
    pub pause_on_hover: bool,
    /// Slides per view by terminal width.
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: 3000,
            looping: false,
            pause_on_hover: true,
            breakpoints: default_breakpoints(),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn wrap_mode(&self) -> WrapMode {
        WrapMode::from(self.looping)
    }
}

/// Toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 4000 }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Email API credentials. Each may be overridden by a `FOLIO_EMAIL_*`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub base_url: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub auto_reply_template_id: Option<String>,
    pub public_key: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.emailjs.com".to_string(),
            service_id: None,
            template_id: None,
            auto_reply_template_id: None,
            public_key: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Optional path to a portfolio content file (TOML).
    pub content_path: Option<String>,

    #[serde(default)]
    pub typewriter: TypewriterConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub email: EmailConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// holds a zero delay.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let delays = [
            ("typewriter.typing_speed_ms", self.typewriter.typing_speed_ms),
            ("typewriter.pause_ms", self.typewriter.pause_ms),
            ("typewriter.cursor_blink_ms", self.typewriter.cursor_blink_ms),
            ("carousel.interval_ms", self.carousel.interval_ms),
            ("toast.duration_ms", self.toast.duration_ms),
        ];
        for (name, value) in delays {
            if value == 0 {
                bail!("{name} must be greater than zero");
            }
        }
        Ok(())
    }

    /// Content file path, resolved relative to the config directory.
    pub fn content_path(&self) -> Option<PathBuf> {
        let raw = self.content_path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let path = PathBuf::from(raw);
        if path.is_absolute() {
            Some(path)
        } else {
            Some(paths::folio_home().join(path))
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

/// Commented config written by `folio config init`.
pub fn default_config_template() -> &'static str {
    include_str!("../assets/default_config.toml")
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.typewriter.typing_speed_ms, 120);
        assert_eq!(config.carousel.interval(), Duration::from_secs(3));
        assert_eq!(config.carousel.wrap_mode(), WrapMode::Finite);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[typewriter]\npause_ms = 2000\n\n[carousel]\nlooping = true\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.typewriter.pause_ms, 2000);
        assert_eq!(config.typewriter.typing_speed_ms, 120);
        assert_eq!(config.carousel.wrap_mode(), WrapMode::Loop);
        assert!(config.carousel.autoplay);
    }

    #[test]
    fn test_zero_delay_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[typewriter]\ntyping_speed_ms = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("typewriter.typing_speed_ms"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init(&path).is_err());
    }

    #[test]
    fn test_breakpoints_from_toml() {
        let config: Config = toml::from_str(
            "[carousel]\nbreakpoints = [{ min_width = 0, visible = 1 }, { min_width = 60, visible = 2 }]\n",
        )
        .unwrap();
        assert_eq!(
            config.carousel.breakpoints,
            vec![Breakpoint::new(0, 1), Breakpoint::new(60, 2)]
        );
    }
}
