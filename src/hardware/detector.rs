// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host hardware detection
//!
//! Builds a [`HardwareProfile`] for the machine boottune runs on, for when
//! no diagnostic report is at hand. The OS does not expose a reliable GPU
//! name, so the GPU comes from capability-probe strings supplied by the
//! caller.

use serde::{Deserialize, Serialize};
use sysinfo::System;

use super::profile::{
    snap_ram_gb, CpuInfo, GpuInfo, HardwareProfile, RamInfo, RamSource, DEFAULT_CORES,
    DEFAULT_THREADS, UNKNOWN_CPU,
};
use crate::classifier::{classify_probe, CapabilityProbe};

const BYTES_PER_MB: u64 = 1024 * 1024;
const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// Raw values read from the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    /// CPU brand/model name
    pub cpu_brand: String,
    /// Number of logical processors
    pub logical_cpus: usize,
    /// Total system memory in bytes
    pub total_memory_bytes: u64,
}

impl HostSnapshot {
    /// Read the current system
    pub fn detect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();

        HostSnapshot {
            cpu_brand,
            logical_cpus: sys.cpus().len(),
            total_memory_bytes: sys.total_memory(),
        }
    }

    /// Turn the snapshot into a profile, classifying the GPU from `probe`.
    pub fn to_profile(&self, probe: Option<&CapabilityProbe>) -> HardwareProfile {
        HardwareProfile {
            cpu: self.cpu_info(),
            ram: self.ram_info(),
            gpu: probe.map(classify_probe).unwrap_or_default(),
        }
    }

    fn cpu_info(&self) -> CpuInfo {
        let model = if self.cpu_brand.is_empty() {
            UNKNOWN_CPU.to_string()
        } else {
            self.cpu_brand.clone()
        };

        if self.logical_cpus == 0 {
            return CpuInfo {
                model,
                cores: DEFAULT_CORES,
                threads: DEFAULT_THREADS,
            };
        }

        // sysinfo reports logical processors; assume two per core
        let threads = u32::try_from(self.logical_cpus).unwrap_or(u32::MAX);
        CpuInfo {
            model,
            cores: (threads / 2).max(1),
            threads,
        }
    }

    fn ram_info(&self) -> RamInfo {
        if self.total_memory_bytes == 0 {
            return RamInfo::default();
        }

        RamInfo {
            size_gb: snap_ram_gb(self.total_memory_bytes as f64 / BYTES_PER_GB as f64),
            source: RamSource::Parsed,
            raw_text: format!("{}MB RAM", self.total_memory_bytes / BYTES_PER_MB),
        }
    }
}

/// Detect the host and build its profile.
pub fn detect_host(probe: Option<&CapabilityProbe>) -> HardwareProfile {
    let snapshot = HostSnapshot::detect();
    tracing::debug!(
        cpu = %snapshot.cpu_brand,
        logical_cpus = snapshot.logical_cpus,
        memory_bytes = snapshot.total_memory_bytes,
        "host snapshot"
    );
    snapshot.to_profile(probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::Tier;

    fn snapshot(logical_cpus: usize, memory_gb: u64) -> HostSnapshot {
        HostSnapshot {
            cpu_brand: "AMD Ryzen 7 5800X 8-Core Processor".to_string(),
            logical_cpus,
            total_memory_bytes: memory_gb * BYTES_PER_GB,
        }
    }

    #[test]
    fn test_detect_does_not_panic() {
        let snapshot = HostSnapshot::detect();
        let profile = snapshot.to_profile(None);
        assert!(profile.cpu.threads >= profile.cpu.cores);
        assert!(crate::hardware::STANDARD_RAM_SIZES_GB.contains(&profile.ram.size_gb));
    }

    #[test]
    fn test_counts_from_logical_cpus() {
        let profile = snapshot(16, 32).to_profile(None);
        assert_eq!((profile.cpu.cores, profile.cpu.threads), (8, 16));
        assert_eq!(profile.cpu.model, "AMD Ryzen 7 5800X 8-Core Processor");

        let profile = snapshot(1, 32).to_profile(None);
        assert_eq!((profile.cpu.cores, profile.cpu.threads), (1, 1));
    }

    #[test]
    fn test_ram_is_snapped() {
        let mut host = snapshot(8, 0);
        host.total_memory_bytes = 15_900 * BYTES_PER_MB;
        let ram = host.to_profile(None).ram;
        assert_eq!(ram.size_gb, 16);
        assert_eq!(ram.source, RamSource::Parsed);
        assert_eq!(ram.raw_text, "15900MB RAM");
    }

    #[test]
    fn test_empty_snapshot_uses_defaults() {
        let profile = HostSnapshot::default().to_profile(None);
        assert_eq!(profile, HardwareProfile::default());
    }

    #[test]
    fn test_gpu_from_probe() {
        let probe = CapabilityProbe::new("NVIDIA Corporation", "NVIDIA GeForce RTX 3070");
        let profile = snapshot(12, 16).to_profile(Some(&probe));
        assert_eq!(profile.gpu.model, "NVIDIA GeForce RTX 3070");
        assert_eq!(profile.gpu.tier, Tier::High);

        let profile = snapshot(12, 16).to_profile(None);
        assert!(profile.gpu.is_unknown());
    }
}
