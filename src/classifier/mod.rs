// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU tier classification
//!
//! Maps a GPU identity string (a report's card name or a capability probe's
//! renderer string) to a [`Tier`]. Classification is total: every string
//! gets a tier, and anything unrecognised lands on `Medium`.

pub mod probe;
pub mod tables;

pub use probe::*;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::hardware::Tier;
use tables::{VendorTable, FALLBACK_TIER, LARGE_TEXTURE_LIMIT, SMALL_TEXTURE_LIMIT, VENDOR_TABLES};

/// GPU vendors the classifier knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuVendor {
    Nvidia,
    Amd,
    Intel,
    Unknown,
}

impl GpuVendor {
    /// Display name, empty for `Unknown`
    pub fn name(&self) -> &'static str {
        match self {
            GpuVendor::Nvidia => "NVIDIA",
            GpuVendor::Amd => "AMD",
            GpuVendor::Intel => "Intel",
            GpuVendor::Unknown => "",
        }
    }
}

impl std::fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuVendor::Unknown => write!(f, "Unknown"),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Optional hints that refine a classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Largest texture dimension the GPU reports (capability probes only)
    pub max_texture_size: Option<u32>,
}

impl ClassifyOptions {
    pub fn with_max_texture_size(max_texture_size: u32) -> Self {
        Self {
            max_texture_size: Some(max_texture_size),
        }
    }
}

/// Classify a GPU identity string.
pub fn classify(identity: &str, options: ClassifyOptions) -> Tier {
    let normalized = normalize_identity(identity);
    let base = match vendor_table(&normalized) {
        Some(table) => table_tier(table, &normalized),
        None => FALLBACK_TIER,
    };
    let tier = apply_texture_hint(base, options.max_texture_size);

    tracing::trace!(identity, %base, %tier, "classified GPU");
    tier
}

/// Detect the vendor of a GPU identity string.
pub fn detect_vendor(identity: &str) -> GpuVendor {
    vendor_table(&normalize_identity(identity)).map_or(GpuVendor::Unknown, |table| table.vendor)
}

/// Apply the one-step texture-size correction.
pub fn apply_texture_hint(tier: Tier, max_texture_size: Option<u32>) -> Tier {
    match max_texture_size {
        Some(size) if size <= SMALL_TEXTURE_LIMIT => tier.step_down(),
        Some(size) if size >= LARGE_TEXTURE_LIMIT => tier.step_up(),
        _ => tier,
    }
}

fn vendor_table(normalized: &str) -> Option<&'static VendorTable> {
    VENDOR_TABLES
        .iter()
        .find(|table| table.keywords.iter().any(|keyword| normalized.contains(keyword)))
}

fn table_tier(table: &VendorTable, normalized: &str) -> Tier {
    table
        .rules()
        .find(|rule| normalized.contains(rule.pattern))
        .map_or(FALLBACK_TIER, |rule| rule.tier)
}

/// Lowercase, drop trademark marks, split `rtx3070` into `rtx 3070` and
/// collapse whitespace.
pub fn normalize_identity(identity: &str) -> String {
    static SERIES_REGEX: OnceLock<Regex> = OnceLock::new();
    let series = SERIES_REGEX
        .get_or_init(|| Regex::new(r"\b(rtx|gtx|rx|gt)(\d)").expect("series pattern is valid"));

    let lowered = identity
        .to_lowercase()
        .replace("(tm)", " ")
        .replace("(r)", " ")
        .replace(['™', '®'], " ");
    let split = series.replace_all(&lowered, "$1 $2");

    split.split_whitespace().collect::<Vec<_>>().join(" ")
}
