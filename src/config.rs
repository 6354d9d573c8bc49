//! Configuration file support
//!
//! Loads settings from ~/.decorations.toml (or %USERPROFILE%\.decorations.toml on Windows)
//!
//! Example:
//! ```text
//! # decorations configuration
//! match-class = "match-highlight"
//! range-check = "reject"
//! hover-width = 60
//!
//! [theme.error]
//! fg = "bright-red"
//! underline = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::Result;
use crate::session::RangeCheck;
use crate::style::{Style, Theme};

const MIN_HOVER_WIDTH: usize = 10;
const MAX_HOVER_WIDTH: usize = 200;

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Class given to highlights built from pattern matches
    pub match_class: String,
    /// Policy for zero-based or inverted ranges
    pub range_check: RangeCheck,
    /// Maximum tooltip width in display columns
    pub hover_width: usize,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_class: "match-highlight".to_string(),
            range_check: RangeCheck::Defer,
            hover_width: 80,
            theme: Theme::default(),
        }
    }
}

/// On-disk layout; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    match_class: Option<String>,
    range_check: Option<RangeCheck>,
    hover_width: Option<usize>,
    theme: HashMap<String, Style>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".decorations.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".decorations.toml"))
        }
    }

    /// Load configuration from the default location.
    ///
    /// A missing or unreadable file gives the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        debug!("loading config from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)?;
        let mut config = Config::default();
        config.apply(raw);
        Ok(config)
    }

    fn apply(&mut self, raw: RawConfig) {
        if let Some(class) = raw.match_class {
            if !class.trim().is_empty() {
                self.match_class = class.trim().to_string();
            }
        }

        if let Some(range_check) = raw.range_check {
            self.range_check = range_check;
        }

        if let Some(width) = raw.hover_width {
            self.hover_width = width.clamp(MIN_HOVER_WIDTH, MAX_HOVER_WIDTH);
        }

        self.theme.extend(raw.theme);
    }
}
