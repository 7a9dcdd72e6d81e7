// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! boot.config generation command
//!
//! Values are resolved per field: an explicit flag wins, then the parsed
//! report, then the settings defaults. The result is clamped before it
//! reaches the synthesizer.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::{GenerateArgs, OutputFormat};
use crate::config::{Settings, DEFAULT_OUTPUT_FILE};
use crate::error::{Result, TuneError};
use crate::hardware::{CpuPreset, HardwareProfile, Tier};
use crate::parser;
use crate::synth::{synthesize_for, ConfigDocument, Platform, TuningInputs};
use crate::utils::format_size;

use super::{read_report, tier_label};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateInfo<'a> {
    inputs: &'a TuningInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backup: Option<String>,
    line_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_defaults: Option<String>,
}

/// Resolve the tuning inputs from flags, an optional parsed report and the
/// settings, then clamp them.
pub fn resolve_inputs(
    args: &GenerateArgs,
    profile: Option<&HardwareProfile>,
    settings: &Settings,
) -> Result<TuningInputs> {
    let fallback = TuningInputs::default();

    let tier = match args.tier.as_deref() {
        Some(name) => name.parse::<Tier>().map_err(TuneError::InvalidInput)?,
        None => profile.map_or(fallback.tier, |p| p.gpu.tier),
    };

    let platform = match args.platform.as_deref() {
        Some(name) => name.parse::<Platform>().map_err(TuneError::InvalidInput)?,
        None => settings.default_platform()?,
    };

    let (cores, threads) = match args.cpu_preset.as_deref() {
        Some(name) => name
            .parse::<CpuPreset>()
            .map_err(TuneError::InvalidInput)?
            .counts(),
        None => {
            let (cores, threads) =
                profile.map_or((fallback.cores, fallback.threads), |p| {
                    (p.cpu.cores, p.cpu.threads)
                });
            (args.cores.unwrap_or(cores), args.threads.unwrap_or(threads))
        }
    };

    let ram_gb = args
        .ram
        .unwrap_or_else(|| profile.map_or(fallback.ram_gb, |p| p.ram.size_gb));

    let runtime_version = args
        .runtime_version
        .as_deref()
        .unwrap_or(&settings.defaults.runtime_version)
        .trim()
        .to_string();
    if runtime_version.is_empty() {
        return Err(TuneError::InvalidInput(
            "runtime version must not be empty".to_string(),
        ));
    }

    let requested = TuningInputs {
        cores,
        threads,
        ram_gb,
        tier,
        runtime_version,
        platform,
    };
    let inputs = requested.clamped();
    if inputs != requested {
        tracing::warn!(
            cores = requested.cores,
            threads = requested.threads,
            ram_gb = requested.ram_gb,
            "inputs out of range, clamped to {}/{} threads/cores and {} GB",
            inputs.threads,
            inputs.cores,
            inputs.ram_gb
        );
    }

    Ok(inputs)
}

/// Settings with the defaults replaced by what this run resolved to.
///
/// The output path only becomes the default when one was given explicitly.
pub fn with_saved_defaults(
    settings: &Settings,
    inputs: &TuningInputs,
    output: Option<&Path>,
) -> Settings {
    let mut updated = settings.clone();
    updated.defaults.runtime_version = inputs.runtime_version.clone();
    updated.defaults.platform = inputs.platform.as_str().to_string();
    if let Some(output) = output {
        updated.defaults.output_file = output.display().to_string();
    }
    updated
}

/// `<name>.backup` next to `path`
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_OUTPUT_FILE));
    name.push(".backup");
    path.with_file_name(name)
}

/// Write the document to `path`, first renaming an existing file to its
/// backup name when `backup` is set. Returns the backup path if one was made.
pub async fn write_document(
    path: &Path,
    document: &ConfigDocument,
    backup: bool,
) -> Result<Option<PathBuf>> {
    let mut backup_path = None;

    if backup && tokio::fs::try_exists(path).await? {
        let target = backup_path_for(path);
        tokio::fs::rename(path, &target).await?;
        tracing::info!(from = %path.display(), to = %target.display(), "kept previous file");
        backup_path = Some(target);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, document.render()).await?;
    Ok(backup_path)
}

fn render_summary(
    inputs: &TuningInputs,
    output: &Path,
    backup: Option<&Path>,
    document: &ConfigDocument,
    color: bool,
) -> String {
    let mut out = String::from("\n=== boot.config Generated ===\n\n");
    out.push_str(&format!(
        "File: {} ({} settings, {})\n",
        output.display(),
        document.len(),
        format_size(document.render().len() as u64)
    ));
    if let Some(backup) = backup {
        out.push_str(&format!("Previous file kept as: {}\n", backup.display()));
    }
    out.push_str(&format!(
        "CPU: {} cores / {} threads\n",
        inputs.cores, inputs.threads
    ));
    out.push_str(&format!("RAM: {}GB\n", inputs.ram_gb));
    out.push_str(&format!("Tier: {}\n", tier_label(inputs.tier, color)));
    out.push_str(&format!(
        "Runtime: {} ({})\n",
        inputs.runtime_version, inputs.platform
    ));
    out
}

/// Execute the generate command
///
/// `settings_path` is where `--save-defaults` writes the updated settings.
pub async fn execute(
    args: &GenerateArgs,
    format: &OutputFormat,
    settings: &Settings,
    settings_path: &Path,
) -> Result<()> {
    let profile = match &args.report {
        Some(path) => Some(parser::parse(&read_report(path, settings).await?)),
        None => None,
    };

    let inputs = resolve_inputs(args, profile.as_ref(), settings)?;
    let document = synthesize_for(&inputs);

    let saved_defaults = if args.save_defaults {
        let updated = with_saved_defaults(settings, &inputs, args.output.as_deref());
        updated.save_to(settings_path)?;
        tracing::info!(path = %settings_path.display(), "saved defaults");
        Some(settings_path.display().to_string())
    } else {
        None
    };

    if args.stdout {
        if matches!(format, OutputFormat::Json) {
            let info = GenerateInfo {
                inputs: &inputs,
                output: None,
                backup: None,
                line_count: document.len(),
                document: Some(document.render()),
                saved_defaults,
            };
            println!("{}", serde_json::to_string_pretty(&info)?);
        } else {
            println!("{}", document);
        }
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.defaults.output_file));
    let backup = !args.no_backup && settings.defaults.backup_existing;
    let backup_path = write_document(&output, &document, backup).await?;
    tracing::info!(path = %output.display(), lines = document.len(), "wrote boot.config");

    if matches!(format, OutputFormat::Json) {
        let info = GenerateInfo {
            inputs: &inputs,
            output: Some(output.display().to_string()),
            backup: backup_path.as_ref().map(|p| p.display().to_string()),
            line_count: document.len(),
            document: None,
            saved_defaults,
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    print!(
        "{}",
        render_summary(
            &inputs,
            &output,
            backup_path.as_deref(),
            &document,
            settings.display.color
        )
    );
    if let Some(path) = &saved_defaults {
        println!("Defaults saved to: {}", path);
    }
    println!("\nPlace the file in the game's <GameName>_Data folder");
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{CpuInfo, RamInfo, RamSource};
    use tempfile::TempDir;

    fn report_profile() -> HardwareProfile {
        let mut profile = HardwareProfile {
            cpu: CpuInfo {
                model: "AMD Ryzen 7 5800X 8-Core Processor".to_string(),
                cores: 8,
                threads: 16,
            },
            ram: RamInfo {
                size_gb: 32,
                source: RamSource::Parsed,
                raw_text: "32768MB RAM".to_string(),
            },
            ..HardwareProfile::default()
        };
        profile.gpu.tier = Tier::High;
        profile
    }

    // ==================== resolve_inputs ====================

    #[test]
    fn test_resolve_defaults() {
        let inputs =
            resolve_inputs(&GenerateArgs::default(), None, &Settings::default()).unwrap();
        assert_eq!(inputs, TuningInputs::default());
    }

    #[test]
    fn test_resolve_from_report() {
        let profile = report_profile();
        let inputs =
            resolve_inputs(&GenerateArgs::default(), Some(&profile), &Settings::default())
                .unwrap();
        assert_eq!((inputs.cores, inputs.threads), (8, 16));
        assert_eq!(inputs.ram_gb, 32);
        assert_eq!(inputs.tier, Tier::High);
    }

    #[test]
    fn test_flags_override_report() {
        let profile = report_profile();
        let args = GenerateArgs {
            threads: Some(24),
            tier: Some("ultra".to_string()),
            ram: Some(64),
            ..GenerateArgs::default()
        };
        let inputs = resolve_inputs(&args, Some(&profile), &Settings::default()).unwrap();
        assert_eq!((inputs.cores, inputs.threads), (8, 24));
        assert_eq!(inputs.ram_gb, 64);
        assert_eq!(inputs.tier, Tier::Ultra);
    }

    #[test]
    fn test_settings_supply_runtime_and_platform() {
        let mut settings = Settings::default();
        settings.defaults.platform = "android".to_string();
        settings.defaults.runtime_version = "2022.3".to_string();

        let inputs = resolve_inputs(&GenerateArgs::default(), None, &settings).unwrap();
        assert_eq!(inputs.platform, Platform::Android);
        assert_eq!(inputs.runtime_version, "2022.3");

        let args = GenerateArgs {
            platform: Some("linux".to_string()),
            runtime_version: Some(" 2020.3 ".to_string()),
            ..GenerateArgs::default()
        };
        let inputs = resolve_inputs(&args, None, &settings).unwrap();
        assert_eq!(inputs.platform, Platform::Linux);
        assert_eq!(inputs.runtime_version, "2020.3");
    }

    #[test]
    fn test_cpu_preset() {
        let args = GenerateArgs {
            cpu_preset: Some("hybrid-14c20t".to_string()),
            ..GenerateArgs::default()
        };
        let inputs = resolve_inputs(&args, Some(&report_profile()), &Settings::default())
            .unwrap();
        assert_eq!((inputs.cores, inputs.threads), (14, 20));
    }

    #[test]
    fn test_unknown_names_are_invalid_input() {
        for args in [
            GenerateArgs {
                tier: Some("epic".to_string()),
                ..GenerateArgs::default()
            },
            GenerateArgs {
                platform: Some("dreamcast".to_string()),
                ..GenerateArgs::default()
            },
            GenerateArgs {
                cpu_preset: Some("quantum".to_string()),
                ..GenerateArgs::default()
            },
            GenerateArgs {
                runtime_version: Some("  ".to_string()),
                ..GenerateArgs::default()
            },
        ] {
            let err = resolve_inputs(&args, None, &Settings::default()).unwrap_err();
            assert!(matches!(err, TuneError::InvalidInput(_)), "{:?}", args);
        }
    }

    #[test]
    fn test_inputs_are_clamped() {
        let args = GenerateArgs {
            cores: Some(1),
            threads: Some(512),
            ram: Some(1),
            ..GenerateArgs::default()
        };
        let inputs = resolve_inputs(&args, None, &Settings::default()).unwrap();
        assert_eq!((inputs.cores, inputs.threads, inputs.ram_gb), (2, 128, 4));
    }

    // ==================== writing ====================

    #[test]
    fn test_backup_path_for() {
        assert_eq!(
            backup_path_for(Path::new("game/boot.config")),
            PathBuf::from("game/boot.config.backup")
        );
        assert_eq!(
            backup_path_for(Path::new("boot.config")),
            PathBuf::from("boot.config.backup")
        );
    }

    #[tokio::test]
    async fn test_write_document_with_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boot.config");
        std::fs::write(&path, "old=1").unwrap();

        let document = synthesize_for(&TuningInputs::default());
        let backup = write_document(&path, &document, true).await.unwrap();

        let backup = backup.unwrap();
        assert_eq!(backup, temp_dir.path().join("boot.config.backup"));
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "old=1");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), document.render());
    }

    #[tokio::test]
    async fn test_write_document_without_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boot.config");
        std::fs::write(&path, "old=1").unwrap();

        let document = synthesize_for(&TuningInputs::default());
        assert!(write_document(&path, &document, false)
            .await
            .unwrap()
            .is_none());
        assert!(!temp_dir.path().join("boot.config.backup").exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), document.render());
    }

    #[tokio::test]
    async fn test_write_document_new_file_creates_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Game_Data").join("boot.config");

        let document = synthesize_for(&TuningInputs::default());
        assert!(write_document(&path, &document, true)
            .await
            .unwrap()
            .is_none());
        assert!(path.exists());
    }

    #[test]
    fn test_render_summary() {
        let inputs = TuningInputs::default();
        let document = synthesize_for(&inputs);
        let text = render_summary(
            &inputs,
            Path::new("boot.config"),
            Some(Path::new("boot.config.backup")),
            &document,
            false,
        );
        assert!(text.contains(&format!(
            "File: boot.config ({} settings, {})",
            document.len(),
            format_size(document.render().len() as u64)
        )));
        assert!(text.contains("Previous file kept as: boot.config.backup"));
        assert!(text.contains("CPU: 6 cores / 12 threads"));
        assert!(text.contains("Tier: medium"));
        assert!(text.contains("Runtime: 2021.3 (windows)"));
    }

    #[tokio::test]
    async fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let report = temp_dir.path().join("DxDiag.txt");
        std::fs::write(
            &report,
            "DxDiag Version: 10.00\nProcessor: Intel(R) Core(TM) i5-12400 (12 CPUs)\nMemory: 16384MB RAM\n",
        )
        .unwrap();
        let output = temp_dir.path().join("boot.config");

        let args = GenerateArgs {
            report: Some(report),
            output: Some(output.clone()),
            ..GenerateArgs::default()
        };
        let settings_path = temp_dir.path().join("settings.json");
        execute(&args, &OutputFormat::Json, &Settings::default(), &settings_path)
            .await
            .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("gfx-enable-gfx-jobs="));
        assert!(written.contains("memorysetup-bucket-allocator-block-size=8388608"));

        execute(&args, &OutputFormat::Text, &Settings::default(), &settings_path)
            .await
            .unwrap();
        assert!(temp_dir.path().join("boot.config.backup").exists());
        assert!(!settings_path.exists());
    }

    #[test]
    fn test_with_saved_defaults() {
        let inputs = TuningInputs {
            runtime_version: "2022.3".to_string(),
            platform: Platform::Android,
            ..TuningInputs::default()
        };
        let settings = Settings::default();

        let updated = with_saved_defaults(&settings, &inputs, None);
        assert_eq!(updated.defaults.runtime_version, "2022.3");
        assert_eq!(updated.defaults.platform, "android");
        assert_eq!(updated.defaults.output_file, DEFAULT_OUTPUT_FILE);
        assert_eq!(updated.display, settings.display);

        let output = Path::new("Game_Data/boot.config");
        let updated = with_saved_defaults(&settings, &inputs, Some(output));
        assert_eq!(updated.defaults.output_file, "Game_Data/boot.config");
    }

    #[tokio::test]
    async fn test_execute_save_defaults_persists_settings() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        std::fs::write(&settings_path, r#"{"display": {"color": false, "width": 80}}"#).unwrap();
        let settings = Settings::load_from(&settings_path).unwrap();

        let output = temp_dir.path().join("Game_Data").join("boot.config");
        let args = GenerateArgs {
            platform: Some("linux".to_string()),
            runtime_version: Some("2022.3".to_string()),
            output: Some(output.clone()),
            save_defaults: true,
            ..GenerateArgs::default()
        };
        execute(&args, &OutputFormat::Json, &settings, &settings_path)
            .await
            .unwrap();
        assert!(output.exists());

        let saved = Settings::load_from(&settings_path).unwrap();
        assert_eq!(saved.defaults.platform, "linux");
        assert_eq!(saved.defaults.runtime_version, "2022.3");
        assert_eq!(saved.defaults.output_file, output.display().to_string());
        assert!(!saved.display.color);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&settings_path).unwrap()).unwrap();
        assert_eq!(raw["display"]["width"], 80);

        // The next run picks the saved platform up without flags
        let inputs = resolve_inputs(&GenerateArgs::default(), None, &saved).unwrap();
        assert_eq!(inputs.platform, Platform::Linux);
    }
}
