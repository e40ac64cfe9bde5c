use std::fs;
use std::path::{Path, PathBuf};

use calc_study_application::{CloakSettings, DisguiseSettings, EscapeSettings};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_FRAME_CONTAINER_ID: &str = "viewer-frame";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Every field is optional in the file; missing ones keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_path: Option<String>,
    pub frame_container_id: String,
    pub panic_key: String,
    pub panic_destination: String,
    pub detach_destination: String,
    pub masked_path: String,
    pub root_path: String,
    pub popup_blocked_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let CloakSettings { disguise, escape } = CloakSettings::default();
        Self {
            catalog_path: None,
            frame_container_id: DEFAULT_FRAME_CONTAINER_ID.to_string(),
            panic_key: escape.panic_key,
            panic_destination: escape.panic_destination,
            detach_destination: escape.detach_destination,
            masked_path: disguise.masked_path,
            root_path: disguise.root_path,
            popup_blocked_message: escape.popup_blocked_message,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn cloak_settings(&self) -> CloakSettings {
        CloakSettings {
            disguise: DisguiseSettings {
                masked_path: self.masked_path.clone(),
                root_path: self.root_path.clone(),
            },
            escape: EscapeSettings {
                panic_key: self.panic_key.clone(),
                panic_destination: self.panic_destination.clone(),
                detach_destination: self.detach_destination.clone(),
                popup_blocked_message: self.popup_blocked_message.clone(),
            },
        }
    }
}
