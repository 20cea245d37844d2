use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::enrichment::EnrichmentConfig;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanionSettings {
    pub enrichment: EnrichmentConfig,
}

/// JSON-backed settings file. A missing file means defaults; an unreadable
/// one falls back to defaults with a warning.
pub struct SettingsStore {
    path: PathBuf,
    data: CompanionSettings,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "ignoring malformed settings in {}: {err}",
                    path.display()
                );
                CompanionSettings::default()
            })
        } else {
            CompanionSettings::default()
        };

        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &CompanionSettings {
        &self.data
    }

    pub fn enrichment(&self) -> &EnrichmentConfig {
        &self.data.enrichment
    }

    pub fn update(&mut self, settings: CompanionSettings) -> Result<()> {
        self.data = settings;
        self.persist()
    }

    pub fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
