//! Configuration handling for the TUI

use crate::submission::DEFAULT_LATENCY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Where submissions are addressed (opaque to the simulated transport)
    pub destination: Option<String>,
    /// Simulated submission latency
    pub submit_delay_ms: Option<u64>,
    /// Make the simulated transport fail every submission
    pub simulate_failure: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY)
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }
}
