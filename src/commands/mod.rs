// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each module exposes an `execute` function called from `main.rs`. Text
//! rendering is kept in separate functions returning `String` so it can be
//! tested without capturing stdout.

pub mod classify;
pub mod generate;
pub mod parse;
pub mod presets;
pub mod system;

use std::path::Path;

use crossterm::style::{style, Stylize};
use serde::Serialize;

use crate::config::Settings;
use crate::error::{Result, TuneError};
use crate::hardware::{GpuCardDetail, HardwareProfile, RamSource, Tier};
use crate::utils::{decode_report_bytes, has_report_signature, tier_color};

/// Read and decode a diagnostic report.
///
/// Fails with [`TuneError::InvalidInput`] when the signature check is on
/// and the text does not look like a DxDiag report.
pub async fn read_report(path: &Path, settings: &Settings) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        TuneError::InvalidInput(format!("cannot read report {}: {}", path.display(), e))
    })?;
    let text = decode_report_bytes(&bytes);
    tracing::debug!(
        path = %path.display(),
        size = %crate::utils::format_size(bytes.len() as u64),
        chars = text.chars().count(),
        "read report"
    );

    if settings.parser.require_report_signature && !has_report_signature(&text) {
        return Err(TuneError::InvalidInput(format!(
            "{} does not look like a DxDiag report (run `dxdiag /t report.txt` to create one)",
            path.display()
        )));
    }

    Ok(text)
}

/// Tier name, coloured when `color` is set
pub(crate) fn tier_label(tier: Tier, color: bool) -> String {
    if color {
        style(tier.as_str()).with(tier_color(tier)).bold().to_string()
    } else {
        tier.as_str().to_string()
    }
}

/// JSON view of a hardware profile
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileInfo<'a> {
    cpu_model: &'a str,
    cpu_cores: u32,
    cpu_threads: u32,
    ram_gb: u32,
    ram_source: RamSource,
    ram_text: &'a str,
    gpu_model: &'a str,
    gpu_chip: &'a str,
    gpu_vendor: &'a str,
    gpu_memory: &'a str,
    tier: Tier,
    tier_description: &'static str,
    adapters: &'a [GpuCardDetail],
}

impl<'a> ProfileInfo<'a> {
    pub(crate) fn new(profile: &'a HardwareProfile) -> Self {
        Self {
            cpu_model: &profile.cpu.model,
            cpu_cores: profile.cpu.cores,
            cpu_threads: profile.cpu.threads,
            ram_gb: profile.ram.size_gb,
            ram_source: profile.ram.source,
            ram_text: &profile.ram.raw_text,
            gpu_model: &profile.gpu.model,
            gpu_chip: &profile.gpu.chip_name,
            gpu_vendor: &profile.gpu.vendor,
            gpu_memory: &profile.gpu.dedicated_memory_text,
            tier: profile.gpu.tier,
            tier_description: profile.gpu.tier.description(),
            adapters: &profile.gpu.details,
        }
    }
}

/// Text rendering of a hardware profile, shared by `parse` and `system`
pub(crate) fn render_profile(title: &str, profile: &HardwareProfile, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n=== {} ===\n\n", title));

    out.push_str(&format!(
        "CPU: {} ({} cores / {} threads)\n",
        profile.cpu.model, profile.cpu.cores, profile.cpu.threads
    ));

    let ram_note = match profile.ram.source {
        RamSource::Parsed if !profile.ram.raw_text.is_empty() => {
            format!(" (from \"{}\")", profile.ram.raw_text)
        }
        RamSource::Parsed => String::new(),
        RamSource::Default => " (default, no memory line found)".to_string(),
    };
    out.push_str(&format!("RAM: {}GB{}\n", profile.ram.size_gb, ram_note));

    out.push_str(&format!("GPU: {}", profile.gpu.model));
    if !profile.gpu.vendor.is_empty() {
        out.push_str(&format!(" [{}]", profile.gpu.vendor));
    }
    out.push('\n');
    out.push_str(&format!(
        "Tier: {} ({})\n",
        tier_label(profile.gpu.tier, color),
        profile.gpu.tier.description()
    ));

    if profile.gpu.details.len() > 1 {
        out.push_str("\n=== Display Adapters ===\n");
        for card in &profile.gpu.details {
            let kind = if card.is_integrated {
                "integrated"
            } else {
                "discrete"
            };
            out.push_str(&format!("  • {} ({})", card.card_name, kind));
            if !card.dedicated_memory_text.is_empty() {
                out.push_str(&format!(", {}", card.dedicated_memory_text));
            }
            if !card.driver_version.is_empty() {
                out.push_str(&format!(", driver {}", card.driver_version));
            }
            out.push('\n');
        }
    }

    out
}
