// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tier and CPU preset listing command

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::{CpuPreset, Tier};
use crate::synth::{tier_settings, TierSettings};

use super::tier_label;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TierInfo {
    tier: Tier,
    description: &'static str,
    examples: &'static [&'static str],
    settings: TierSettings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CpuPresetInfo {
    name: &'static str,
    cores: u32,
    threads: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetList {
    tiers: Vec<TierInfo>,
    cpu_presets: Vec<CpuPresetInfo>,
}

fn preset_list() -> PresetList {
    PresetList {
        tiers: Tier::ALL
            .into_iter()
            .map(|tier| TierInfo {
                tier,
                description: tier.description(),
                examples: tier.examples(),
                settings: tier_settings(tier),
            })
            .collect(),
        cpu_presets: CpuPreset::ALL
            .into_iter()
            .map(|preset| {
                let (cores, threads) = preset.counts();
                CpuPresetInfo {
                    name: preset.name(),
                    cores,
                    threads,
                }
            })
            .collect(),
    }
}

fn render_text(list: &PresetList, color: bool) -> String {
    let mut out = String::from("\n=== GPU Tiers ===\n");

    for info in &list.tiers {
        let row = &info.settings;
        out.push_str(&format!(
            "\n{} - {}\n",
            tier_label(info.tier, color),
            info.description
        ));
        out.push_str(&format!("  Examples: {}\n", info.examples.join(", ")));
        out.push_str(&format!(
            "  Textures: {}, shadows: {} ({} cascades), anti-aliasing: {}, shader chunks: {}\n",
            row.texture_quality,
            row.shadow_distance,
            row.shadow_cascades,
            row.anti_aliasing,
            row.max_chunks_per_shader
        ));
    }

    out.push_str("\n=== CPU Presets ===\n\n");
    for preset in &list.cpu_presets {
        out.push_str(&format!(
            "  {:<16} {:>2} cores / {:>2} threads\n",
            preset.name, preset.cores, preset.threads
        ));
    }

    out
}

/// Execute the presets command
pub fn execute(format: &OutputFormat, settings: &Settings) -> Result<()> {
    let list = preset_list();

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    print!("{}", render_text(&list, settings.display.color));
    println!("\nUse 'boottune generate --tier <TIER> --cpu-preset <NAME>' without a report");
    println!();

    Ok(())
}
