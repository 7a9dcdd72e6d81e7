// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Constant tables behind the boot.config synthesizer
//!
//! Byte sizes are computed as `base * quarters * num / (4 * den)` where
//! `quarters` is the RAM step's multiplier in quarter units. Bases are
//! powers of two, so every value comes out exact.

use serde::{Deserialize, Serialize};

use crate::hardware::Tier;

/// Share of logical processors handed to the job system, as (num, den).
pub const WORKER_RATIO: (u32, u32) = (4, 5);

/// Major runtime versions that receive the extra runtime block.
pub const NEWER_RUNTIME_MAJORS: [&str; 2] = ["2021", "2022"];

/// Texture resolution level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureQuality {
    Quarter,
    Half,
    Full,
}

impl TextureQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextureQuality::Quarter => "quarter",
            TextureQuality::Half => "half",
            TextureQuality::Full => "full",
        }
    }
}

impl std::fmt::Display for TextureQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering settings for one GPU tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSettings {
    pub max_chunks_per_shader: u32,
    pub hdr: bool,
    pub gfx_jobs: bool,
    pub render_thread: bool,
    pub texture_quality: TextureQuality,
    pub shadow_distance: u32,
    pub shadow_cascades: u32,
    pub particle_quality: u32,
    pub reflection_quality: u32,
    pub anti_aliasing: u32,
}

/// The settings row for a tier.
pub fn tier_settings(tier: Tier) -> TierSettings {
    match tier {
        Tier::Minimum => TierSettings {
            max_chunks_per_shader: 2,
            hdr: false,
            gfx_jobs: false,
            render_thread: false,
            texture_quality: TextureQuality::Quarter,
            shadow_distance: 15,
            shadow_cascades: 0,
            particle_quality: 0,
            reflection_quality: 0,
            anti_aliasing: 0,
        },
        Tier::Low => TierSettings {
            max_chunks_per_shader: 6,
            hdr: false,
            gfx_jobs: false,
            render_thread: false,
            texture_quality: TextureQuality::Half,
            shadow_distance: 35,
            shadow_cascades: 1,
            particle_quality: 0,
            reflection_quality: 0,
            anti_aliasing: 0,
        },
        Tier::Medium => TierSettings {
            max_chunks_per_shader: 16,
            hdr: true,
            gfx_jobs: true,
            render_thread: true,
            texture_quality: TextureQuality::Full,
            shadow_distance: 100,
            shadow_cascades: 3,
            particle_quality: 2,
            reflection_quality: 1,
            anti_aliasing: 1,
        },
        Tier::High => TierSettings {
            max_chunks_per_shader: 20,
            hdr: true,
            gfx_jobs: true,
            render_thread: true,
            texture_quality: TextureQuality::Full,
            shadow_distance: 150,
            shadow_cascades: 4,
            particle_quality: 3,
            reflection_quality: 2,
            anti_aliasing: 2,
        },
        Tier::Ultra => TierSettings {
            max_chunks_per_shader: 32,
            hdr: true,
            gfx_jobs: true,
            render_thread: true,
            texture_quality: TextureQuality::Full,
            shadow_distance: 200,
            shadow_cascades: 4,
            particle_quality: 3,
            reflection_quality: 2,
            anti_aliasing: 2,
        },
    }
}

/// Allocator sizing for RAM at or above `min_ram_gb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStep {
    pub min_ram_gb: u32,
    /// Memory multiplier in quarters (`6` means 1.5x)
    pub quarters: u64,
    pub buckets: u32,
    pub blocks: u32,
}

const fn step(min_ram_gb: u32, quarters: u64, buckets: u32, blocks: u32) -> MemoryStep {
    MemoryStep {
        min_ram_gb,
        quarters,
        buckets,
        blocks,
    }
}

/// Steps from the largest RAM size down; the last one catches everything.
pub const MEMORY_STEPS: [MemoryStep; 7] = [
    step(256, 20, 128, 16),
    step(128, 16, 96, 12),
    step(64, 14, 64, 8),
    step(32, 11, 32, 6),
    step(16, 8, 24, 4),
    step(8, 6, 16, 2),
    step(0, 4, 8, 1),
];

/// The memory step that applies to `ram_gb`.
pub fn memory_step(ram_gb: u32) -> MemoryStep {
    MEMORY_STEPS
        .iter()
        .copied()
        .find(|step| ram_gb >= step.min_ram_gb)
        .unwrap_or(MEMORY_STEPS[MEMORY_STEPS.len() - 1])
}

/// RAM at which the large allocator bases take over
pub const LARGE_BASE_MIN_RAM_GB: u32 = 128;

pub const BLOCK_BASE: u64 = 4 * 1024 * 1024;
pub const MAIN_BASE: u64 = 32 * 1024 * 1024;
pub const LARGE_BLOCK_BASE: u64 = 8 * 1024 * 1024;
pub const LARGE_MAIN_BASE: u64 = 64 * 1024 * 1024;

/// (block, main) allocator bases for `ram_gb`
pub fn allocator_bases(ram_gb: u32) -> (u64, u64) {
    if ram_gb >= LARGE_BASE_MIN_RAM_GB {
        (LARGE_BLOCK_BASE, LARGE_MAIN_BASE)
    } else {
        (BLOCK_BASE, MAIN_BASE)
    }
}

/// What a memory parameter's byte size is scaled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryBase {
    Block,
    Main,
    Fixed(u64),
}

/// How a memory parameter's value is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryValue {
    Constant(u64),
    BucketCount,
    BlockCount,
    /// `base * multiplier * num / den`
    Scaled { base: MemoryBase, num: u64, den: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryParameter {
    pub key: &'static str,
    pub value: MemoryValue,
}

const fn constant(key: &'static str, value: u64) -> MemoryParameter {
    MemoryParameter {
        key,
        value: MemoryValue::Constant(value),
    }
}

const fn scaled(key: &'static str, base: MemoryBase, num: u64, den: u64) -> MemoryParameter {
    MemoryParameter {
        key,
        value: MemoryValue::Scaled { base, num, den },
    }
}

const fn counted(key: &'static str, value: MemoryValue) -> MemoryParameter {
    MemoryParameter { key, value }
}

use MemoryBase::{Block, Fixed, Main};

/// Memory allocator keys in output order.
pub const MEMORY_PARAMETERS: [MemoryParameter; 31] = [
    constant("memorysetup-bucket-allocator-granularity", 16),
    counted("memorysetup-bucket-allocator-bucket-count", MemoryValue::BucketCount),
    scaled("memorysetup-bucket-allocator-block-size", Block, 1, 1),
    counted("memorysetup-bucket-allocator-block-count", MemoryValue::BlockCount),
    scaled("memorysetup-main-allocator-block-size", Main, 1, 1),
    scaled("memorysetup-thread-allocator-block-size", Main, 1, 1),
    scaled("memorysetup-gfx-main-allocator-block-size", Main, 1, 1),
    scaled("memorysetup-gfx-thread-allocator-block-size", Main, 1, 1),
    scaled("memorysetup-cache-allocator-block-size", Block, 1, 1),
    scaled("memorysetup-typetree-allocator-block-size", Block, 1, 2),
    constant("memorysetup-profiler-bucket-allocator-granularity", 16),
    counted("memorysetup-profiler-bucket-allocator-bucket-count", MemoryValue::BucketCount),
    scaled("memorysetup-profiler-bucket-allocator-block-size", Block, 1, 1),
    counted("memorysetup-profiler-bucket-allocator-block-count", MemoryValue::BlockCount),
    scaled("memorysetup-profiler-allocator-block-size", Main, 1, 1),
    scaled("memorysetup-profiler-editor-allocator-block-size", Block, 1, 4),
    scaled("memorysetup-temp-allocator-size-main", Main, 3, 4),
    scaled("memorysetup-temp-allocator-size-worker", Block, 1, 2),
    scaled("memorysetup-temp-allocator-size-background-worker", Fixed(131_072), 1, 1),
    scaled("memorysetup-temp-allocator-size-nav-mesh-worker", Fixed(262_144), 1, 1),
    scaled("memorysetup-temp-allocator-size-audio-worker", Fixed(262_144), 1, 1),
    scaled("memorysetup-temp-allocator-size-cloud-worker", Fixed(131_072), 1, 1),
    scaled("memorysetup-temp-allocator-size-gfx", Block, 1, 2),
    scaled("memorysetup-job-temp-allocator-block-size", Main, 2, 1),
    scaled("memorysetup-job-temp-allocator-block-size-background", Block, 1, 2),
    constant("memorysetup-job-temp-allocator-reduction-small-platforms", 262_144),
    scaled("memorysetup-allocator-temp-initial-block-size-main", Block, 1, 2),
    scaled("memorysetup-allocator-temp-initial-block-size-worker", Block, 1, 2),
    scaled("memorysetup-temp-allocator-size-ui-worker", Block, 1, 4),
    scaled("memorysetup-temp-allocator-size-shared-worker", Block, 1, 8),
    scaled("memorysetup-temp-allocator-size-job-worker", Block, 3, 8),
];

/// Keys appended for the mobile target.
pub const ANDROID_BLOCK: [(&str, &str); 8] = [
    ("androidStartInFullscreen", "1"),
    ("androidRenderOutsideSafeArea", "1"),
    ("adaptive-performance-samsung-boost-launch", "1"),
    ("use-frame-timing", "1"),
    ("use-job-worker-for-load-balancing", "1"),
    ("android-force-hard-shader-compression", "1"),
    ("android-enable-etw-profiling", "0"),
    ("android-shader-cache", "1"),
];

/// Keys appended for the newer runtime majors.
pub const RUNTIME_BLOCK: [(&str, &str); 9] = [
    ("use-static-batch", "true"),
    ("use-dynamic-batch", "true"),
    ("use-incremental-gc", "true"),
    ("dynamic-batching", "true"),
    ("use-compressed-mesh-data", "1"),
    ("use-compressed-texture-data", "1"),
    ("use-optimized-frame-pacing", "1"),
    ("use-fast-tier-swap", "1"),
    ("use-minimal-gc", "1"),
];

/// How a trailing setting depends on the tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscValue {
    Always(u32),
    /// 0 for Minimum and Low, 1 otherwise
    Unconstrained,
    /// 0 for Minimum only
    AboveMinimum,
}

impl MiscValue {
    pub fn resolve(self, tier: Tier) -> u32 {
        match self {
            MiscValue::Always(value) => value,
            MiscValue::Unconstrained => u32::from(!tier.is_constrained()),
            MiscValue::AboveMinimum => u32::from(tier != Tier::Minimum),
        }
    }
}

pub const MISC_SETTINGS: [(&str, MiscValue); 12] = [
    ("use-optimized-mesh-data", MiscValue::Always(1)),
    ("use-shader-cache", MiscValue::Always(1)),
    ("use-job-worker-for-mesh-data", MiscValue::Unconstrained),
    ("optimize-mesh-data-jobs", MiscValue::Unconstrained),
    ("use-incremental-build-roi", MiscValue::Always(1)),
    ("use-shader-compiler-cache", MiscValue::Always(1)),
    ("use-async-compilation", MiscValue::Unconstrained),
    ("use-multi-threaded-compilation", MiscValue::Unconstrained),
    ("use-load-time-texture-compression", MiscValue::Always(1)),
    ("use-background-job-worker", MiscValue::AboveMinimum),
    ("use-job-graph-recording", MiscValue::Unconstrained),
    ("use-optimized-window-mode", MiscValue::Always(1)),
];
