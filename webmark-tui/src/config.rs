use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use webmark_core::{SongSource, WebViewConfig};

use crate::style::Style;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub web_view: WebViewConfig,
    #[serde(default)]
    pub style: Style,
}
impl Config {
    pub const FILENAME: &str = "webmark-config.toml";

    /// Loads the config, writing out the defaults if there isn't one yet.
    pub fn load() -> anyhow::Result<Self> {
        match std::fs::read_to_string(Self::FILENAME) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", Self::FILENAME)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, creating default config");
                let config = Config::default();
                if let Err(e) = config.save() {
                    tracing::warn!("{e:#}");
                }
                Ok(config)
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", Self::FILENAME)),
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let contents = toml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(Self::FILENAME, contents)
            .with_context(|| format!("Failed to write {}", Self::FILENAME))?;
        tracing::info!("saved config to {}", Self::FILENAME);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct General {
    pub tick_rate_ms: u64,
}
impl Default for General {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Data {
    /// A song list to use instead of the bundled one.
    pub songs_path: Option<PathBuf>,
    /// Where artist photos (`<image_ref>.png` and friends) are looked up.
    pub assets_dir: PathBuf,
}
impl Data {
    pub fn song_source(&self) -> SongSource {
        SongSource::from_path(self.songs_path.clone())
    }
}
impl Default for Data {
    fn default() -> Self {
        Self {
            songs_path: None,
            assets_dir: PathBuf::from("assets"),
        }
    }
}
