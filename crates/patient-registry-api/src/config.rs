//! Service configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Runtime settings, with defaults suitable for local use.
///
/// Settings come from an optional JSON config file, overridden per-field
/// by `PATIENT_REGISTRY_HOST`, `PATIENT_REGISTRY_PORT`, and
/// `PATIENT_REGISTRY_DATA_FILE`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the backing JSON document.
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            data_file: PathBuf::from("patients.json"),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config: Config = match path {
            Some(p) => serde_json::from_str(&std::fs::read_to_string(p)?)?,
            None => Self::default(),
        };
        if let Ok(host) = std::env::var("PATIENT_REGISTRY_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PATIENT_REGISTRY_PORT") {
            config.port = port.parse()?;
        }
        if let Ok(file) = std::env::var("PATIENT_REGISTRY_DATA_FILE") {
            config.data_file = PathBuf::from(file);
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
