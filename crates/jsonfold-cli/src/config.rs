use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_open_levels() -> u32 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How many nesting levels start expanded. Must be at least 1.
    #[serde(default = "default_open_levels")]
    pub default_open_levels: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_open_levels: default_open_levels(),
        }
    }
}

impl Config {
    /// Load a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}
