// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for boottune
//!
//! The parsing, classification and synthesis pipeline never fails; these
//! errors belong to the shell around it (reading reports, settings, writing
//! the generated file, command-line values).

use thiserror::Error;

/// Main error type for boottune operations
#[derive(Error, Debug)]
pub enum TuneError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for boottune operations
pub type Result<T> = std::result::Result<T, TuneError>;

impl From<toml::de::Error> for TuneError {
    fn from(err: toml::de::Error) -> Self {
        TuneError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for TuneError {
    fn from(err: toml::ser::Error) -> Self {
        TuneError::Toml(err.to_string())
    }
}
