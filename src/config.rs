use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::attributes::Color;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Style configuration. Missing keys fall back to the built-in defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub headings: HeadingsConfig,
    pub colors: ColorsConfig,
    pub lists: ListsConfig,
    pub links: LinksConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f32,
    pub code_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 14.0,
            code_size: 13.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeadingsConfig {
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub h4_size: f32,
    pub h5_size: f32,
    pub h6_size: f32,
}

impl Default for HeadingsConfig {
    fn default() -> Self {
        Self {
            h1_size: 28.0,
            h2_size: 24.0,
            h3_size: 20.0,
            h4_size: 18.0,
            h5_size: 16.0,
            h6_size: 14.0,
        }
    }
}

impl HeadingsConfig {
    /// Get the font size for a heading level.
    /// Levels outside 1-6 are clamped to the nearest level.
    pub fn size_for_heading(&self, level: u8) -> f32 {
        match level {
            0 | 1 => self.h1_size,
            2 => self.h2_size,
            3 => self.h3_size,
            4 => self.h4_size,
            5 => self.h5_size,
            _ => self.h6_size,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub text: Color,
    pub heading: Color,
    pub quote: Color,
    pub code_background: Color,
    pub list_prefix: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            text: Color::rgb(0x1f, 0x23, 0x28),
            heading: Color::rgb(0x1f, 0x23, 0x28),
            quote: Color::rgb(0x59, 0x63, 0x6e),
            code_background: Color::rgb(0xf6, 0xf8, 0xfa),
            list_prefix: Color::rgb(0x59, 0x63, 0x6e),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    /// Indent of a top-level list, in points.
    pub indent: f32,
    /// Space between the widest prefix and the item content, in points.
    pub prefix_gap: f32,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            indent: 12.0,
            prefix_gap: 6.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// URL schemes that are rendered as links.
    pub schemes: Vec<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            schemes: vec!["http".into(), "https".into(), "mailto".into()],
        }
    }
}

impl Config {
    /// The configuration bundled with the crate. `build.rs` checks that it
    /// parses; a schema mismatch falls back to the coded defaults.
    pub fn compiled_default() -> Self {
        match toml::from_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid bundled default_config.toml, using built-in defaults: {e}");
                Self::default()
            }
        }
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            config_path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: path.to_path_buf(),
            source,
        })
    }
}
