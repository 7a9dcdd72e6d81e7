// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use boottune::cli::{Cli, Commands, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_parse_command() {
    let args = vec!["boottune", "parse", "C:\\Users\\me\\DxDiag.txt"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Parse(parse_args) = cli.command {
        assert_eq!(parse_args.report, PathBuf::from("C:\\Users\\me\\DxDiag.txt"));
    } else {
        panic!("Expected Parse command");
    }
}

#[test]
fn test_parse_classify_command() {
    let args = vec!["boottune", "classify", "AMD Radeon RX 7900 XTX"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Classify(classify_args) = cli.command {
        assert_eq!(classify_args.renderer, "AMD Radeon RX 7900 XTX");
    } else {
        panic!("Expected Classify command");
    }
}

#[test]
fn test_parse_generate_from_report() {
    let args = vec![
        "boottune",
        "generate",
        "--report",
        "DxDiag.txt",
        "--platform",
        "android",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Generate(generate_args) = cli.command {
        assert_eq!(generate_args.report, Some(PathBuf::from("DxDiag.txt")));
        assert_eq!(generate_args.platform.as_deref(), Some("android"));
        assert!(generate_args.tier.is_none());
    } else {
        panic!("Expected Generate command");
    }
}

#[test]
fn test_parse_generate_without_report() {
    let args = vec![
        "boottune",
        "generate",
        "--cpu-preset",
        "premium",
        "--tier",
        "ultra",
        "--ram",
        "64",
        "--stdout",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Generate(generate_args) = cli.command {
        assert_eq!(generate_args.cpu_preset.as_deref(), Some("premium"));
        assert_eq!(generate_args.ram, Some(64));
        assert!(generate_args.stdout);
    } else {
        panic!("Expected Generate command");
    }
}

#[test]
fn test_parse_generate_rejects_negative_ram() {
    assert!(Cli::try_parse_from(["boottune", "generate", "--ram", "-8"]).is_err());
}

#[test]
fn test_parse_system_command() {
    let cli = Cli::try_parse_from(["boottune", "system"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::System(_)));
}

#[test]
fn test_parse_presets_json() {
    let cli = Cli::try_parse_from(["boottune", "--format", "json", "presets"])
        .expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Presets));
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "boottune",
        "classify",
        "Intel Arc A770",
        "-vv",
        "--config",
        "alt.toml",
    ])
    .expect("Valid command parsing");
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
}

#[test]
fn test_version_flag() {
    let err = Cli::try_parse_from(["boottune", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
