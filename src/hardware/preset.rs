// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Named CPU presets offered when no report is available

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named (cores, threads) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CpuPreset {
    EntryLevel,
    #[serde(rename = "mid-range-4c4t")]
    MidRange4c4t,
    #[serde(rename = "mid-range-6c6t")]
    MidRange6c6t,
    #[default]
    MidRange,
    #[serde(rename = "high-end-8c8t")]
    HighEnd8c8t,
    HighEnd,
    #[serde(rename = "premium-12c12t")]
    Premium12c12t,
    Premium,
    #[serde(rename = "hybrid-14c20t")]
    Hybrid14c20t,
}

impl CpuPreset {
    pub const ALL: [CpuPreset; 9] = [
        CpuPreset::EntryLevel,
        CpuPreset::MidRange4c4t,
        CpuPreset::MidRange6c6t,
        CpuPreset::MidRange,
        CpuPreset::HighEnd8c8t,
        CpuPreset::HighEnd,
        CpuPreset::Premium12c12t,
        CpuPreset::Premium,
        CpuPreset::Hybrid14c20t,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CpuPreset::EntryLevel => "entry-level",
            CpuPreset::MidRange4c4t => "mid-range-4c4t",
            CpuPreset::MidRange6c6t => "mid-range-6c6t",
            CpuPreset::MidRange => "mid-range",
            CpuPreset::HighEnd8c8t => "high-end-8c8t",
            CpuPreset::HighEnd => "high-end",
            CpuPreset::Premium12c12t => "premium-12c12t",
            CpuPreset::Premium => "premium",
            CpuPreset::Hybrid14c20t => "hybrid-14c20t",
        }
    }

    /// (cores, threads)
    pub fn counts(&self) -> (u32, u32) {
        match self {
            CpuPreset::EntryLevel => (4, 8),
            CpuPreset::MidRange4c4t => (4, 4),
            CpuPreset::MidRange6c6t => (6, 6),
            CpuPreset::MidRange => (6, 12),
            CpuPreset::HighEnd8c8t => (8, 8),
            CpuPreset::HighEnd => (8, 16),
            CpuPreset::Premium12c12t => (12, 12),
            CpuPreset::Premium => (12, 24),
            CpuPreset::Hybrid14c20t => (14, 20),
        }
    }
}

impl std::fmt::Display for CpuPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CpuPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CpuPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| format!("unknown CPU preset '{}'", s.trim()))
    }
}
