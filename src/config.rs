//! Tile rendering configuration model, defaults, and file loading.

use std::path::Path;

use log::{info, warn};

use crate::album_tile::TileSize;

/// File name used inside the user's config directory.
pub const CONFIG_FILE_NAME: &str = "albumtile.toml";

/// Root configuration persisted to `albumtile.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    #[serde(default)]
    /// Artwork URL construction.
    pub artwork: ArtworkConfig,
    #[serde(default)]
    /// Tile output preferences.
    pub tiles: TileConfig,
}

/// Where cover images are served from.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArtworkConfig {
    #[serde(default = "default_artwork_url_root")]
    pub url_root: String,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            url_root: default_artwork_url_root(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TileConfig {
    #[serde(default)]
    pub default_size: TileSize,
}

fn default_artwork_url_root() -> String {
    "artwork".to_string()
}

/// Replaces blank values with their defaults.
pub fn sanitize_config(config: Config) -> Config {
    let mut sanitized = config;
    if sanitized.artwork.url_root.trim().is_empty() {
        sanitized.artwork.url_root = default_artwork_url_root();
    }
    sanitized
}

/// Parses config text, reporting TOML errors as readable messages.
pub fn parse_config(config_text: &str) -> Result<Config, String> {
    toml::from_str::<Config>(config_text)
        .map(sanitize_config)
        .map_err(|err| format!("failed to parse config as TOML: {}", err))
}

/// Loads the config file, falling back to defaults when it cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Config {
    let config_content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "Failed to read config file {}. Using defaults. error={}",
                path.display(),
                err
            );
            return Config::default();
        }
    };

    match parse_config(&config_content) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                "Failed to parse config file {}. Using defaults. error={}",
                path.display(),
                err
            );
            Config::default()
        }
    }
}

/// Writes the default config when no file exists yet.
pub fn ensure_config_file(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    info!(
        "Config file not found. Creating default config. path={}",
        path.display()
    );
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!(
                "failed to create config directory {}: {}",
                parent.display(),
                err
            )
        })?;
    }
    let config_text = toml::to_string(&Config::default())
        .map_err(|err| format!("failed to serialize default config: {}", err))?;
    std::fs::write(path, config_text)
        .map_err(|err| format!("failed to write config to {}: {}", path.display(), err))
}
