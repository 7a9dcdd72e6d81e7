// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Diagnostic report parsing command

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::parser;

use super::{read_report, render_profile, ProfileInfo};

/// Execute the parse command
pub async fn execute(args: &ParseArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    let text = read_report(&args.report, settings).await?;
    let profile = parser::parse(&text);

    if matches!(format, OutputFormat::Json) {
        println!(
            "{}",
            serde_json::to_string_pretty(&ProfileInfo::new(&profile))?
        );
        return Ok(());
    }

    print!(
        "{}",
        render_profile("Hardware Report", &profile, settings.display.color)
    );
    if profile.gpu.is_unknown() {
        println!("\nNo display adapter was recognised; the medium tier is assumed.");
    }
    println!(
        "\nRun 'boottune generate --report {}' to write a boot.config",
        args.report.display()
    );
    println!();

    Ok(())
}
