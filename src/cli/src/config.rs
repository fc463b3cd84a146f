use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use log::debug;
use rubiks_core::{Color, DEFAULT_SHUFFLES};
use serde::Deserialize;

/// Defaults read from a TOML file. Every field may be overridden on the
/// command line.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub front: Option<Color>,
    pub top: Option<Color>,
    pub shuffles: Option<usize>,
    pub seed: Option<u64>,
    /// Print colored stickers
    pub color: Option<bool>,
}

impl Config {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read the configuration file {}", path.display()))?;
        let config = Self::parse(&text)
            .wrap_err_with(|| format!("Failed to parse the configuration file {}", path.display()))?;
        debug!("Loaded {config:?} from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn front(&self) -> Color {
        self.front.unwrap_or(Color::Red)
    }

    pub fn shuffles(&self) -> usize {
        self.shuffles.unwrap_or(DEFAULT_SHUFFLES)
    }

    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
