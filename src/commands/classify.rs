// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU tier classification command

use serde::Serialize;

use crate::classifier::{classify_probe, normalize_identity, CapabilityProbe};
use crate::cli::args::{ClassifyArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::Tier;

use super::tier_label;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ClassificationInfo {
    renderer: String,
    normalized: String,
    vendor: String,
    max_texture_size: Option<u32>,
    tier: Tier,
    tier_description: String,
}

fn probe_from_args(args: &ClassifyArgs) -> CapabilityProbe {
    CapabilityProbe {
        vendor: args.vendor.clone().unwrap_or_default(),
        renderer: args.renderer.clone(),
        max_texture_size: args.max_texture_size,
    }
}

fn classification(args: &ClassifyArgs) -> ClassificationInfo {
    let probe = probe_from_args(args);
    let gpu = classify_probe(&probe);

    ClassificationInfo {
        renderer: gpu.model,
        normalized: normalize_identity(&probe.renderer),
        vendor: gpu.vendor,
        max_texture_size: probe.max_texture_size,
        tier: gpu.tier,
        tier_description: gpu.tier.description().to_string(),
    }
}

/// Execute the classify command
pub fn execute(args: &ClassifyArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    let info = classification(args);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("\n=== GPU Classification ===\n");
    println!("Renderer: {}", info.renderer);
    if !info.vendor.is_empty() {
        println!("Vendor: {}", info.vendor);
    }
    if let Some(size) = info.max_texture_size {
        println!("Max texture size: {}", size);
    }
    println!(
        "Tier: {} ({})",
        tier_label(info.tier, settings.display.color),
        info.tier_description
    );
    println!();

    Ok(())
}
