// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! boot.config synthesis
//!
//! [`synthesize`] is pure and total. Inputs are expected to be clamped by
//! the caller (see [`TuningInputs::clamped`]); out-of-range values are not
//! rejected, they just produce proportionally odd numbers.

pub mod document;
pub mod inputs;
pub mod tables;

pub use document::*;
pub use inputs::*;
pub use tables::{tier_settings, TextureQuality, TierSettings, WORKER_RATIO};

use crate::hardware::Tier;
use tables::{
    allocator_bases, memory_step, MemoryBase, MemoryValue, ANDROID_BLOCK, MEMORY_PARAMETERS,
    MISC_SETTINGS, RUNTIME_BLOCK,
};

/// Job workers for a thread count: `max(1, floor(threads * 4 / 5))`.
pub fn worker_count(threads: u32) -> u32 {
    let (num, den) = WORKER_RATIO;
    let workers = u64::from(threads) * u64::from(num) / u64::from(den);
    u32::try_from(workers).unwrap_or(u32::MAX).max(1)
}

fn flag(enabled: bool) -> u32 {
    u32::from(enabled)
}

fn push_core(doc: &mut ConfigDocument, threads: u32, tier: Tier, row: &TierSettings) {
    let section = Section::CoreRender;
    doc.insert(section, "gfx-enable-gfx-jobs", flag(row.gfx_jobs));
    doc.insert(section, "gfx-enable-native-gfx-jobs", flag(row.gfx_jobs));
    doc.insert(section, "max-chunks-per-shader", row.max_chunks_per_shader);
    doc.insert(section, "wait-for-native-debugger", 0);
    doc.insert(section, "vr-enabled", 0);
    doc.insert(section, "hdr-display-enabled", flag(row.hdr));
    doc.insert(section, "job-worker-count", worker_count(threads));
    doc.insert(
        section,
        "gc-max-time-slice",
        if tier.is_constrained() { 1 } else { 3 },
    );
    doc.insert(section, "renderthread", flag(row.render_thread));
}

fn push_tier(doc: &mut ConfigDocument, row: &TierSettings) {
    let section = Section::GpuTier;
    doc.insert(section, "texture-quality", row.texture_quality);
    doc.insert(section, "shadow-distance", row.shadow_distance);
    doc.insert(section, "shadow-cascades", row.shadow_cascades);
    doc.insert(section, "particle-quality", row.particle_quality);
    doc.insert(section, "reflection-quality", row.reflection_quality);
    doc.insert(section, "anti-aliasing", row.anti_aliasing);
}

fn push_memory(doc: &mut ConfigDocument, ram_gb: u32) {
    let step = memory_step(ram_gb);
    let (block_base, main_base) = allocator_bases(ram_gb);

    for parameter in MEMORY_PARAMETERS {
        let value = match parameter.value {
            MemoryValue::Constant(value) => value,
            MemoryValue::BucketCount => u64::from(step.buckets),
            MemoryValue::BlockCount => u64::from(step.blocks),
            MemoryValue::Scaled { base, num, den } => {
                let base = match base {
                    MemoryBase::Block => block_base,
                    MemoryBase::Main => main_base,
                    MemoryBase::Fixed(bytes) => bytes,
                };
                base * step.quarters * num / (4 * den)
            }
        };
        doc.insert(Section::MemoryAllocator, parameter.key, value);
    }
}

/// Build the boot.config document.
pub fn synthesize(
    cpu_threads: u32,
    tier: Tier,
    ram_gb: u32,
    runtime_version: &str,
    platform: &str,
) -> ConfigDocument {
    let row = tier_settings(tier);
    let platform = Platform::from_name_lossy(platform);
    let newer_runtime = is_newer_runtime(runtime_version);

    let mut doc = ConfigDocument::new();
    push_core(&mut doc, cpu_threads, tier, &row);
    push_tier(&mut doc, &row);

    if platform.is_mobile_target() {
        for (key, value) in ANDROID_BLOCK {
            doc.insert(Section::Platform, key, value);
        }
    }
    if newer_runtime {
        for (key, value) in RUNTIME_BLOCK {
            doc.insert(Section::RuntimeVersion, key, value);
        }
    }

    push_memory(&mut doc, ram_gb);

    for (key, value) in MISC_SETTINGS {
        doc.insert(Section::Misc, key, value.resolve(tier));
    }

    tracing::debug!(
        threads = cpu_threads,
        %tier,
        ram_gb,
        %platform,
        newer_runtime,
        lines = doc.len(),
        "synthesized boot.config"
    );

    doc
}

/// [`synthesize`] over a set of tuning inputs, used as given.
pub fn synthesize_for(inputs: &TuningInputs) -> ConfigDocument {
    synthesize(
        inputs.threads,
        inputs.tier,
        inputs.ram_gb,
        &inputs.runtime_version,
        inputs.platform.as_str(),
    )
}
