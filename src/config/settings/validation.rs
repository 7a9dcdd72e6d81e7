// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{Result, TuneError};
use crate::synth::Platform;

use super::Settings;

impl Settings {
    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<()> {
        self.default_platform()?;

        if self.defaults.output_file.trim().is_empty() {
            return Err(TuneError::Config(
                "defaults.output_file must not be empty".to_string(),
            ));
        }
        if self.defaults.runtime_version.trim().is_empty() {
            return Err(TuneError::Config(
                "defaults.runtime_version must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured default platform.
    pub fn default_platform(&self) -> Result<Platform> {
        self.defaults
            .platform
            .parse()
            .map_err(|e| TuneError::Config(format!("defaults.platform: {}", e)))
    }
}
