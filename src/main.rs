// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! boottune - tuned boot.config files from hardware reports
//!
//! Entry point for the boottune CLI.

use std::process::ExitCode;

use clap::Parser;

use boottune::cli::{Cli, Commands};
use boottune::commands;
use boottune::config::Settings;
use boottune::error::Result;
use boottune::utils;

fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let directive = match verbose {
        0 => None,
        1 => Some("boottune=debug"),
        _ => Some("boottune=trace"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_from(&settings_path)?;

    match &cli.command {
        Commands::Parse(args) => commands::parse::execute(args, &cli.format, &settings).await,
        Commands::Classify(args) => commands::classify::execute(args, &cli.format, &settings),
        Commands::Generate(args) => {
            commands::generate::execute(args, &cli.format, &settings, &settings_path).await
        }
        Commands::System(args) => commands::system::execute(args, &cli.format, &settings),
        Commands::Presets => commands::presets::execute(&cli.format, &settings),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{}", utils::format_error(&err));
            ExitCode::FAILURE
        }
    }
}
