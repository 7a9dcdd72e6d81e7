// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::{Result, TuneError};

use super::merge::deep_merge;
use super::Settings;

/// On-disk settings formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
            _ => FileFormat::Json,
        }
    }
}

fn invalid(path: &Path, err: impl std::fmt::Display) -> TuneError {
    TuneError::Config(format!("{}: {}", path.display(), err))
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::boottune_home().join("settings.json")
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults. Unparseable or invalid content is
    /// a [`TuneError::Config`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let raw_value: serde_json::Value = match FileFormat::of(path) {
            FileFormat::Json => serde_json::from_str(&content).map_err(|e| invalid(path, e))?,
            FileFormat::Toml => {
                let value: toml::Value = toml::from_str(&content).map_err(|e| invalid(path, e))?;
                serde_json::to_value(value)?
            }
        };

        let settings: Settings = serde_json::from_value(raw_value).map_err(|e| invalid(path, e))?;
        settings.validate().map_err(|e| invalid(path, e))?;
        Ok(settings)
    }

    /// Save settings to a specific path.
    ///
    /// JSON files are merged with their existing content so keys written by
    /// other versions or by hand survive. TOML files are rewritten.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = match FileFormat::of(path) {
            FileFormat::Toml => toml::to_string_pretty(self)?,
            FileFormat::Json => {
                let new_value = serde_json::to_value(self)?;
                let merged = if path.exists() {
                    let existing_content = std::fs::read_to_string(path)?;
                    match serde_json::from_str::<serde_json::Value>(&existing_content) {
                        Ok(existing_value) => deep_merge(existing_value, new_value),
                        Err(_) => new_value, // Corrupt file, overwrite entirely.
                    }
                } else {
                    new_value
                };
                serde_json::to_string_pretty(&merged)?
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the boottune home directory (~/.boottune or $BOOTTUNE_HOME).
    pub fn boottune_home() -> PathBuf {
        if let Ok(home) = std::env::var("BOOTTUNE_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".boottune")
    }
}
