// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Installed memory extraction

use regex::Regex;
use std::sync::OnceLock;

use super::patterns::MEMORY_LABELS;
use super::text::{compile_labels, first_value};
use crate::hardware::{snap_ram_gb, RamInfo, RamSource, DEFAULT_RAM_GB};

/// Unit suffix following a memory figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryUnit {
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl MemoryUnit {
    /// Read the unit from the text right after the number; no letter means GB.
    fn after_number(rest: &str) -> Self {
        match rest.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('k') => MemoryUnit::Kilobytes,
            Some('m') => MemoryUnit::Megabytes,
            Some('t') => MemoryUnit::Terabytes,
            _ => MemoryUnit::Gigabytes,
        }
    }

    fn to_gb(self, value: f64) -> f64 {
        match self {
            MemoryUnit::Kilobytes => value / (1024.0 * 1024.0),
            MemoryUnit::Megabytes => value / 1024.0,
            MemoryUnit::Gigabytes => value,
            MemoryUnit::Terabytes => value * 1024.0,
        }
    }

    fn is_small(self) -> bool {
        matches!(self, MemoryUnit::Kilobytes | MemoryUnit::Megabytes)
    }
}

fn memory_labels() -> &'static [Regex] {
    static LABELS: OnceLock<Vec<Regex>> = OnceLock::new();
    LABELS.get_or_init(|| compile_labels(MEMORY_LABELS, true))
}

/// Convert a memory figure such as `16384MB RAM` to whole GB, snapped.
///
/// Returns `None` when the text holds no number.
pub fn memory_text_to_gb(raw: &str) -> Option<u32> {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

    let found = number.find(raw)?;
    let value: f64 = found.as_str().parse().ok()?;
    let unit = MemoryUnit::after_number(&raw[found.end()..]);

    let mut gb = unit.to_gb(value);
    // Sub-gigabyte figures without a KB/MB suffix are read as MB misreported as GB
    if gb < 1.0 && !unit.is_small() {
        gb *= 1024.0;
    }

    Some(snap_ram_gb(gb))
}

/// Extract installed memory.
pub fn parse_ram(text: &str) -> RamInfo {
    let Some(found) = first_value(text, memory_labels()) else {
        tracing::debug!("no memory line, using {} GB", DEFAULT_RAM_GB);
        return RamInfo::default();
    };

    RamInfo {
        size_gb: memory_text_to_gb(found.value).unwrap_or(DEFAULT_RAM_GB),
        source: RamSource::Parsed,
        raw_text: found.value.to_string(),
    }
}
