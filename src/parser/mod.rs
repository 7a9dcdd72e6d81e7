// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Diagnostic report parsing
//!
//! Turns a free-form DxDiag-style dump into a [`HardwareProfile`]. Parsing
//! never fails: every field that cannot be read falls back to its default,
//! and the RAM source records whether the figure came from the report.

pub mod cpu;
pub mod gpu;
pub mod patterns;
pub mod ram;
pub mod text;

pub use cpu::{parse_cpu, CpuFamily};
pub use gpu::parse_gpu;
pub use patterns::LABEL_SET_VERSION;
pub use ram::{memory_text_to_gb, parse_ram};

use crate::hardware::HardwareProfile;

/// Rewrite `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_line_endings(report: &str) -> String {
    report.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse a diagnostic report into a hardware profile.
pub fn parse(report: &str) -> HardwareProfile {
    let text = normalize_line_endings(report);

    let profile = HardwareProfile {
        cpu: parse_cpu(&text),
        ram: parse_ram(&text),
        gpu: parse_gpu(&text),
    };

    tracing::debug!(
        cpu = %profile.cpu.model,
        cores = profile.cpu.cores,
        threads = profile.cpu.threads,
        ram_gb = profile.ram.size_gb,
        gpu = %profile.gpu.model,
        tier = %profile.gpu.tier,
        adapters = profile.gpu.details.len(),
        "parsed report"
    );

    profile
}
