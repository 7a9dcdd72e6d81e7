// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host hardware profile command

use crate::classifier::CapabilityProbe;
use crate::cli::args::{OutputFormat, SystemArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::{detect_host, HardwareProfile};

use super::{render_profile, ProfileInfo};

/// Probe built from the command line, if a renderer was given
fn probe_from_args(args: &SystemArgs) -> Option<CapabilityProbe> {
    let renderer = args.renderer.as_deref()?;
    Some(CapabilityProbe {
        vendor: args.vendor.clone().unwrap_or_default(),
        renderer: renderer.to_string(),
        max_texture_size: args.max_texture_size,
    })
}

fn render_text(profile: &HardwareProfile, probed: bool, color: bool) -> String {
    let mut out = render_profile("Host Hardware Profile", profile, color);
    out.push_str("\nCore count is estimated as half the logical processors.\n");
    if !probed {
        out.push_str(
            "The GPU cannot be read from the OS; pass --renderer (and --vendor) to classify it.\n",
        );
    }
    out
}

/// Execute the system command
pub fn execute(args: &SystemArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    let probe = probe_from_args(args);
    let profile = detect_host(probe.as_ref());

    if matches!(format, OutputFormat::Json) {
        println!(
            "{}",
            serde_json::to_string_pretty(&ProfileInfo::new(&profile))?
        );
        return Ok(());
    }

    print!(
        "{}",
        render_text(&profile, probe.is_some(), settings.display.color)
    );
    println!(
        "\nRun 'boottune generate --threads {} --ram {} --tier {}' to write a boot.config",
        profile.cpu.threads, profile.ram.size_gb, profile.gpu.tier
    );
    println!();

    Ok(())
}
