// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware profile value types
//!
//! A [`HardwareProfile`] is what the diagnostic parser (or the host probe)
//! hands to the rest of the pipeline. Every field carries a usable value:
//! anything that could not be read falls back to a named default.

use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// Core count used when nothing better is known
pub const DEFAULT_CORES: u32 = 6;
/// Thread count used when nothing better is known
pub const DEFAULT_THREADS: u32 = 12;
/// RAM size (GB) used when no memory line was found
pub const DEFAULT_RAM_GB: u32 = 8;
/// CPU model reported when no processor line was found
pub const UNKNOWN_CPU: &str = "Unknown";
/// GPU model reported when no card could be identified
pub const UNKNOWN_GPU: &str = "Unknown GPU";

/// RAM sizes a parsed value is snapped to, ascending.
pub const SNAP_RAM_SIZES_GB: [u32; 6] = [4, 8, 16, 32, 64, 128];
/// Every RAM size the pipeline accepts, ascending.
pub const STANDARD_RAM_SIZES_GB: [u32; 7] = [4, 8, 16, 32, 64, 128, 256];

/// Complete hardware profile extracted from a report or a probe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub cpu: CpuInfo,
    pub ram: RamInfo,
    pub gpu: GpuInfo,
}

/// Processor model and counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Raw processor string from the report
    pub model: String,
    /// Physical core count
    pub cores: u32,
    /// Logical processor count
    pub threads: u32,
}

impl Default for CpuInfo {
    fn default() -> Self {
        Self {
            model: UNKNOWN_CPU.to_string(),
            cores: DEFAULT_CORES,
            threads: DEFAULT_THREADS,
        }
    }
}

/// Where a RAM size came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RamSource {
    /// A memory line was found in the report
    Parsed,
    /// No memory line was found; the default size is used
    #[default]
    Default,
}

/// Installed memory, snapped to a standard module size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamInfo {
    /// Size in GB, always one of [`STANDARD_RAM_SIZES_GB`]
    pub size_gb: u32,
    pub source: RamSource,
    /// The memory line as it appeared in the report
    pub raw_text: String,
}

impl Default for RamInfo {
    fn default() -> Self {
        Self {
            size_gb: DEFAULT_RAM_GB,
            source: RamSource::Default,
            raw_text: String::new(),
        }
    }
}

/// One display adapter found in the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuCardDetail {
    pub card_name: String,
    pub chip_name: String,
    pub manufacturer: String,
    pub dedicated_memory_text: String,
    pub driver_version: String,
    pub is_integrated: bool,
}

/// The primary GPU plus every adapter that was detected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuInfo {
    /// Card name of the primary adapter
    pub model: String,
    pub chip_name: String,
    pub vendor: String,
    pub tier: Tier,
    pub dedicated_memory_text: String,
    /// All detected adapters in report order
    pub details: Vec<GpuCardDetail>,
}

impl Default for GpuInfo {
    fn default() -> Self {
        Self {
            model: UNKNOWN_GPU.to_string(),
            chip_name: String::new(),
            vendor: String::new(),
            tier: Tier::Medium,
            dedicated_memory_text: String::new(),
            details: Vec::new(),
        }
    }
}

impl GpuInfo {
    /// Whether no adapter could be identified
    pub fn is_unknown(&self) -> bool {
        self.details.is_empty() && self.model == UNKNOWN_GPU
    }
}

/// Snap a size in GB to the nearest entry of [`SNAP_RAM_SIZES_GB`].
///
/// Distance is absolute; on an exact tie the smaller size wins.
pub fn snap_ram_gb(value_gb: f64) -> u32 {
    let mut closest = SNAP_RAM_SIZES_GB[0];
    let mut min_diff = (value_gb - f64::from(closest)).abs();

    for &size in &SNAP_RAM_SIZES_GB[1..] {
        let diff = (value_gb - f64::from(size)).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = size;
        }
    }

    closest
}
