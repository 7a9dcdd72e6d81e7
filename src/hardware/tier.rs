// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU performance tiers

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Performance tier assigned to a GPU for tuning purposes.
///
/// Variants are declared from weakest to strongest so the derived `Ord`
/// matches performance order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Integrated graphics and very old discrete cards
    Minimum,
    /// Entry-level discrete cards
    Low,
    /// Mainstream gaming cards
    #[default]
    Medium,
    /// Upper mid-range cards
    High,
    /// Enthusiast cards
    Ultra,
}

impl Tier {
    /// All tiers, weakest first.
    pub const ALL: [Tier; 5] = [
        Tier::Minimum,
        Tier::Low,
        Tier::Medium,
        Tier::High,
        Tier::Ultra,
    ];

    /// Lowercase name used in settings files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Minimum => "minimum",
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
            Tier::Ultra => "ultra",
        }
    }

    /// One tier weaker, saturating at `Minimum`.
    pub fn step_down(self) -> Self {
        match self {
            Tier::Minimum | Tier::Low => Tier::Minimum,
            Tier::Medium => Tier::Low,
            Tier::High => Tier::Medium,
            Tier::Ultra => Tier::High,
        }
    }

    /// One tier stronger, saturating at `Ultra`.
    pub fn step_up(self) -> Self {
        match self {
            Tier::Minimum => Tier::Low,
            Tier::Low => Tier::Medium,
            Tier::Medium => Tier::High,
            Tier::High | Tier::Ultra => Tier::Ultra,
        }
    }

    /// Whether this tier gets the reduced-load variants of the runtime flags
    pub fn is_constrained(&self) -> bool {
        matches!(self, Tier::Minimum | Tier::Low)
    }

    /// Get a human-readable description of this tier
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Minimum => "Integrated graphics or very low-end cards",
            Tier::Low => "Entry-level dedicated graphics",
            Tier::Medium => "Mainstream gaming graphics",
            Tier::High => "High-performance gaming graphics",
            Tier::Ultra => "Top-end gaming graphics",
        }
    }

    /// Representative cards for this tier, one model each
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            Tier::Minimum => &[
                "Intel HD Graphics 4000",
                "Intel UHD Graphics 620",
                "NVIDIA GeForce GT 730",
                "NVIDIA GeForce GTX 1050",
                "AMD Radeon RX 550",
            ],
            Tier::Low => &[
                "NVIDIA GeForce GTX 1050 Ti",
                "NVIDIA GeForce GTX 1650",
                "AMD Radeon RX 6500 XT",
                "Intel Arc A380",
            ],
            Tier::Medium => &[
                "NVIDIA GeForce GTX 1660",
                "NVIDIA GeForce RTX 3060",
                "AMD Radeon RX 6700 XT",
                "AMD Radeon RX 7600",
            ],
            Tier::High => &[
                "NVIDIA GeForce RTX 2080 Ti",
                "NVIDIA GeForce RTX 3070",
                "NVIDIA GeForce RTX 4070",
                "AMD Radeon RX 7800 XT",
            ],
            Tier::Ultra => &[
                "NVIDIA GeForce RTX 3090",
                "NVIDIA GeForce RTX 4090",
                "NVIDIA GeForce RTX 5090",
                "AMD Radeon RX 7900 XTX",
            ],
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimum" | "min" => Ok(Tier::Minimum),
            "low" => Ok(Tier::Low),
            "medium" | "mid" => Ok(Tier::Medium),
            "high" => Ok(Tier::High),
            "ultra" => Ok(Tier::Ultra),
            other => Err(format!(
                "unknown tier '{}' (expected minimum, low, medium, high or ultra)",
                other
            )),
        }
    }
}
