//! Configuration for the command line front end.
//!
//! YAML with precedence: CLI > file > defaults. Every key is optional.
//!
//! ```yaml
//! algorithm: midpoint     # midpoint | dda | bresenham
//! padding: 2
//! foreground: [255, 255, 0, 255]
//! background: [0, 0, 0, 255]
//! log_level: warn
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::raster::LineAlgorithm;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Preview and rasterization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Line strategy when none is given on the command line.
    #[serde(default)]
    pub algorithm: LineAlgorithm,

    /// Pixels of margin around the preview bounds.
    #[serde(default = "default_padding")]
    pub padding: u32,

    /// Color of plotted points.
    #[serde(default = "default_foreground")]
    pub foreground: Rgba,

    /// Preview background.
    #[serde(default = "default_background")]
    pub background: Rgba,

    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_padding() -> u32 {
    2
}
fn default_foreground() -> Rgba {
    Rgba::YELLOW
}
fn default_background() -> Rgba {
    Rgba::BLACK
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: LineAlgorithm::default(),
            padding: default_padding(),
            foreground: default_foreground(),
            background: default_background(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] for a missing file, [`Error::Io`]
    /// for any other read failure, and [`Error::ConfigParse`] for bad YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// The configured log level, or `Warn` when unrecognised.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
