// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for boottune
//!
//! Handles loading and saving settings from ~/.boottune/settings.json

use serde::{Deserialize, Serialize};

use crate::synth::DEFAULT_RUNTIME_VERSION;

mod io;
mod merge;
mod validation;

/// File name written by `generate` when no output is given
pub const DEFAULT_OUTPUT_FILE: &str = "boot.config";

/// Main settings structure, stored in ~/.boottune/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Defaults used by `generate` when a value is neither on the command
    /// line nor in the report
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Report handling
    #[serde(default)]
    pub parser: ParserConfig,

    /// Terminal output
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Fallback values for `generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Runtime version written into the document
    #[serde(default = "default_runtime_version")]
    pub runtime_version: String,

    /// Build target platform name
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Output file name, relative to the working directory
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Rename an existing output file to `<name>.backup` before writing
    #[serde(default = "default_true")]
    pub backup_existing: bool,
}

/// Report handling options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reject reports that do not look like DxDiag output
    #[serde(default = "default_true")]
    pub require_report_signature: bool,
}

/// Terminal output options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colour tier labels in text output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_runtime_version() -> String {
    DEFAULT_RUNTIME_VERSION.to_string()
}

fn default_platform() -> String {
    "windows".to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            runtime_version: default_runtime_version(),
            platform: default_platform(),
            output_file: default_output_file(),
            backup_existing: true,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            require_report_signature: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.defaults.runtime_version, "2021.3");
        assert_eq!(settings.defaults.platform, "windows");
        assert_eq!(settings.defaults.output_file, "boot.config");
        assert!(settings.defaults.backup_existing);
        assert!(settings.parser.require_report_signature);
        assert!(settings.display.color);
    }

    #[test]
    fn test_settings_partial_json() {
        let json = r#"{"defaults": {"platform": "android"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.defaults.platform, "android");
        // Other fields should use defaults
        assert_eq!(settings.defaults.runtime_version, "2021.3");
        assert!(settings.defaults.backup_existing);
        assert!(settings.parser.require_report_signature);
    }

    #[test]
    fn test_settings_empty_json() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_toml() {
        let toml_text = r#"
            [defaults]
            runtime_version = "2022.3"
            backup_existing = false

            [display]
            color = false
        "#;
        let settings: Settings = toml::from_str(toml_text).unwrap();
        assert_eq!(settings.defaults.runtime_version, "2022.3");
        assert!(!settings.defaults.backup_existing);
        assert!(!settings.display.color);
        assert_eq!(settings.defaults.platform, "windows");
    }

    #[test]
    fn test_settings_load_from_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_settings.json");

        let mut settings = Settings::default();
        settings.defaults.platform = "linux".to_string();
        settings.parser.require_report_signature = false;

        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_settings_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir
            .path()
            .join("nested")
            .join("dir")
            .join("settings.json");

        Settings::default().save_to(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_settings_toml_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.defaults.output_file = "tuned.config".to_string();
        settings.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[defaults]"));
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    // ===== Deep merge and merge-save tests =====

    #[test]
    fn test_deep_merge() {
        let base: serde_json::Value = serde_json::json!({
            "a": 1,
            "b": {"c": 2, "d": 3},
            "e": "old"
        });
        let overlay: serde_json::Value = serde_json::json!({
            "b": {"c": 99},
            "e": "new",
            "f": true
        });

        let merged = merge::deep_merge(base, overlay);

        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"]["c"], 99);
        assert_eq!(merged["b"]["d"], 3);
        assert_eq!(merged["e"], "new");
        assert_eq!(merged["f"], true);
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let initial = r#"{
            "defaults": {"platform": "mac", "future_flag": 7},
            "future_section": {"enabled": true}
        }"#;
        std::fs::write(&path, initial).unwrap();

        let mut settings = Settings::load_from(&path).unwrap();
        settings.defaults.platform = "android".to_string();
        settings.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["defaults"]["platform"], "android");
        assert_eq!(value["defaults"]["future_flag"], 7);
        assert_eq!(value["future_section"]["enabled"], true);
    }

    #[test]
    fn test_save_overwrites_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        Settings::default().save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }
}
