//! Layout and server settings, optionally loaded from `.jsonflow.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".jsonflow.toml";

/// Spacing constants for the layered tree layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pitch between depth levels along x.
    pub horizontal_spacing: f64,
    pub node_height: f64,
    /// Gap between sibling slots along y.
    pub vertical_gap: f64,
}

impl LayoutConfig {
    /// Vertical pitch of one leaf slot.
    pub fn slot_height(&self) -> f64 {
        self.node_height + self.vertical_gap
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            horizontal_spacing: 280.0,
            node_height: 60.0,
            vertical_gap: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 7890,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FlowConfig {
    pub layout: LayoutConfig,
    pub server: ServerSettings,
}

impl FlowConfig {
    /// Parse a TOML document. Missing tables and fields take their defaults.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| FlowError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| FlowError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else `.jsonflow.toml` under `dir` if it exists, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = config_path(dir);
        if candidate.exists() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}
