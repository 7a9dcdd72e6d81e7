// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions for boottune
//!
//! Small pure helpers shared by the commands and the entry point.

use crossterm::style::Color;

use crate::error::TuneError;
use crate::hardware::Tier;

/// Marker every DxDiag report carries near the top
pub const REPORT_SIGNATURE: &str = "DxDiag";

/// Format a size in bytes to human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Decode report bytes to text.
///
/// DxDiag saves UTF-16 LE with a BOM on most systems; UTF-16 BE and UTF-8
/// (with or without BOM) are accepted too. A BOM picks the encoding, anything
/// else is read as UTF-8. Invalid sequences become U+FFFD.
pub fn decode_report_bytes(bytes: &[u8]) -> String {
    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "report contained invalid sequences");
    }
    text.into_owned()
}

/// Whether `text` looks like a DxDiag report
pub fn has_report_signature(text: &str) -> bool {
    text.contains(REPORT_SIGNATURE)
}

/// Format an error for display to the user
pub fn format_error(error: &TuneError) -> String {
    match error {
        TuneError::Config(msg) => format!(
            "Settings error: {}\nFix the settings file or pass another one with --config.",
            msg
        ),
        TuneError::InvalidInput(msg) => format!("Error: {}", msg),
        _ => format!("Error: {}", error),
    }
}

/// Terminal colour for a tier label
pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Minimum => Color::Red,
        Tier::Low => Color::Yellow,
        Tier::Medium => Color::Cyan,
        Tier::High => Color::Green,
        Tier::Ultra => Color::Magenta,
    }
}
