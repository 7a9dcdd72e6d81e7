// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for boottune.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// boottune - tuned boot.config files from hardware reports
#[derive(Parser, Debug)]
#[command(name = "boottune")]
#[command(
    version,
    about = "Turns a DxDiag report into a tuned boot.config for the game runtime"
)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Settings file path (.json or .toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a diagnostic report and show the hardware profile
    Parse(ParseArgs),

    /// Classify a GPU renderer string into a performance tier
    Classify(ClassifyArgs),

    /// Generate a boot.config file
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show this machine's hardware profile
    #[command(alias = "hw")]
    System(SystemArgs),

    /// List performance tiers and CPU presets
    Presets,
}

/// Arguments for the parse subcommand
#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Path to a DxDiag text report
    pub report: PathBuf,
}

/// Arguments for the classify subcommand
#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// GPU renderer or card name (e.g. "NVIDIA GeForce RTX 3070")
    pub renderer: String,

    /// GPU vendor string reported alongside the renderer
    #[arg(long)]
    pub vendor: Option<String>,

    /// Maximum texture size reported by the graphics API
    #[arg(long)]
    pub max_texture_size: Option<u32>,
}

/// Arguments for the generate subcommand
#[derive(clap::Args, Debug, Default)]
pub struct GenerateArgs {
    /// DxDiag report to read hardware values from
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Logical processor count
    #[arg(long)]
    pub threads: Option<u32>,

    /// Physical core count
    #[arg(long)]
    pub cores: Option<u32>,

    /// Named CPU preset (see `boottune presets`)
    #[arg(long, conflicts_with_all = ["threads", "cores"])]
    pub cpu_preset: Option<String>,

    /// GPU tier: minimum, low, medium, high or ultra
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Installed RAM in GB
    #[arg(long)]
    pub ram: Option<u32>,

    /// Runtime version (e.g. 2021.3)
    #[arg(long)]
    pub runtime_version: Option<String>,

    /// Build target: windows, mac, linux, android, ios or webgl
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Output file (default: from settings, usually boot.config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Overwrite an existing output file without keeping a backup
    #[arg(long)]
    pub no_backup: bool,

    /// Store the runtime version, platform and output path used here as the
    /// new defaults in the settings file
    #[arg(long)]
    pub save_defaults: bool,
}

/// Arguments for the system subcommand
#[derive(clap::Args, Debug, Default)]
pub struct SystemArgs {
    /// GPU renderer string to classify
    #[arg(long)]
    pub renderer: Option<String>,

    /// GPU vendor string
    #[arg(long)]
    pub vendor: Option<String>,

    /// Maximum texture size reported by the graphics API
    #[arg(long)]
    pub max_texture_size: Option<u32>,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
