// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Caller-side tuning inputs

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::tables::NEWER_RUNTIME_MAJORS;
use crate::hardware::{Tier, DEFAULT_CORES, DEFAULT_RAM_GB, DEFAULT_THREADS};

pub const CORES_RANGE: std::ops::RangeInclusive<u32> = 2..=64;
pub const THREADS_RANGE: std::ops::RangeInclusive<u32> = 4..=128;
pub const RAM_RANGE_GB: std::ops::RangeInclusive<u32> = 4..=256;

/// Runtime version assumed when none is given
pub const DEFAULT_RUNTIME_VERSION: &str = "2021.3";

/// Build target of the runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    Mac,
    Linux,
    Android,
    Ios,
    WebGl,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Windows,
        Platform::Mac,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
        Platform::WebGl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::WebGl => "webgl",
        }
    }

    /// Whether the platform gets the mobile block
    pub fn is_mobile_target(&self) -> bool {
        matches!(self, Platform::Android)
    }

    /// Parse a platform name; anything unrecognised is treated as Windows.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" | "pc" => Ok(Platform::Windows),
            "mac" | "macos" | "osx" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "webgl" | "web" => Ok(Platform::WebGl),
            other => Err(format!(
                "unknown platform '{}' (expected windows, mac, linux, android, ios or webgl)",
                other
            )),
        }
    }
}

/// Whether a runtime version string belongs to one of the newer majors.
pub fn is_newer_runtime(version: &str) -> bool {
    let major = version.trim().split('.').next().unwrap_or_default();
    NEWER_RUNTIME_MAJORS.contains(&major)
}

/// Everything the synthesizer needs, as chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TuningInputs {
    pub cores: u32,
    pub threads: u32,
    pub ram_gb: u32,
    pub tier: Tier,
    pub runtime_version: String,
    pub platform: Platform,
}

impl Default for TuningInputs {
    fn default() -> Self {
        Self {
            cores: DEFAULT_CORES,
            threads: DEFAULT_THREADS,
            ram_gb: DEFAULT_RAM_GB,
            tier: Tier::Medium,
            runtime_version: DEFAULT_RUNTIME_VERSION.to_string(),
            platform: Platform::Windows,
        }
    }
}

impl TuningInputs {
    /// Clamp counts into their accepted ranges, keeping `threads >= cores`.
    pub fn clamped(&self) -> Self {
        let cores = self.cores.clamp(*CORES_RANGE.start(), *CORES_RANGE.end());
        let threads = self
            .threads
            .clamp(*THREADS_RANGE.start(), *THREADS_RANGE.end())
            .max(cores);
        let ram_gb = self.ram_gb.clamp(*RAM_RANGE_GB.start(), *RAM_RANGE_GB.end());

        Self {
            cores,
            threads,
            ram_gb,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("Android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("macOS".parse::<Platform>().unwrap(), Platform::Mac);
        assert!("playstation".parse::<Platform>().is_err());
        assert_eq!(Platform::from_name_lossy("playstation"), Platform::Windows);
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_only_android_is_mobile() {
        let mobile: Vec<Platform> = Platform::ALL
            .into_iter()
            .filter(Platform::is_mobile_target)
            .collect();
        assert_eq!(mobile, vec![Platform::Android]);
    }

    #[test]
    fn test_newer_runtime() {
        assert!(is_newer_runtime("2021.3"));
        assert!(is_newer_runtime("2022.3.14f1"));
        assert!(is_newer_runtime("2022"));
        assert!(!is_newer_runtime("2020.3"));
        assert!(!is_newer_runtime("2023.1"));
        assert!(!is_newer_runtime("20210"));
        assert!(!is_newer_runtime(""));
    }

    #[test]
    fn test_clamped() {
        let inputs = TuningInputs {
            cores: 1,
            threads: 1000,
            ram_gb: 1024,
            ..TuningInputs::default()
        }
        .clamped();
        assert_eq!((inputs.cores, inputs.threads, inputs.ram_gb), (2, 128, 256));

        let inputs = TuningInputs {
            cores: 16,
            threads: 8,
            ram_gb: 2,
            ..TuningInputs::default()
        }
        .clamped();
        assert_eq!((inputs.cores, inputs.threads, inputs.ram_gb), (16, 16, 4));
    }

    #[test]
    fn test_clamped_keeps_valid_inputs() {
        let inputs = TuningInputs::default();
        assert_eq!(inputs.clamped(), inputs);
    }
}
