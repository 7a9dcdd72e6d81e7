// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Processor extraction

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::patterns::{
    CORE_COUNT_PATTERN, CPU_FAMILY_MARKERS, PROCESSOR_LABELS, THREAD_COUNT_PATTERN,
};
use super::text::{compile_labels, first_value};
use crate::hardware::{CpuInfo, DEFAULT_CORES, DEFAULT_THREADS, UNKNOWN_CPU};

/// Desktop CPU families used to infer missing core and thread counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuFamily {
    /// Core i3, Ryzen 3
    Entry,
    /// Core i5, Ryzen 5
    Mainstream,
    /// Core i7, Ryzen 7
    Performance,
    /// Core i9, Ryzen 9
    Enthusiast,
    /// Xeon, Threadripper
    Workstation,
}

impl CpuFamily {
    /// Typical (cores, threads) for the family
    pub fn counts(&self) -> (u32, u32) {
        match self {
            CpuFamily::Entry => (4, 8),
            CpuFamily::Mainstream => (6, 12),
            CpuFamily::Performance => (8, 16),
            CpuFamily::Enthusiast | CpuFamily::Workstation => (12, 24),
        }
    }

    /// Find the family of a processor model string.
    pub fn detect(model: &str) -> Option<Self> {
        let lowered = model.to_lowercase();
        CPU_FAMILY_MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().any(|marker| lowered.contains(marker)))
            .map(|(family, _)| *family)
    }
}

fn processor_labels() -> &'static [Regex] {
    static LABELS: OnceLock<Vec<Regex>> = OnceLock::new();
    LABELS.get_or_init(|| compile_labels(PROCESSOR_LABELS, false))
}

fn first_count(text: &str, pattern: &'static OnceLock<Regex>, source: &str) -> Option<u32> {
    let regex = pattern.get_or_init(|| Regex::new(source).expect("count pattern is valid"));
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|&count| count > 0)
}

/// Extract the processor model and its core/thread counts.
pub fn parse_cpu(text: &str) -> CpuInfo {
    static CORE_REGEX: OnceLock<Regex> = OnceLock::new();
    static THREAD_REGEX: OnceLock<Regex> = OnceLock::new();

    let model = first_value(text, processor_labels()).map(|found| found.value);
    let cores = first_count(text, &CORE_REGEX, CORE_COUNT_PATTERN);
    let threads = first_count(text, &THREAD_REGEX, THREAD_COUNT_PATTERN);

    let (cores, threads) = match (cores, threads) {
        (Some(cores), Some(threads)) => (cores, threads),
        (cores, threads) => {
            let family = model.and_then(CpuFamily::detect);
            let (family_cores, family_threads) =
                family.map_or((DEFAULT_CORES, DEFAULT_THREADS), |family| family.counts());
            tracing::debug!(?family, ?cores, ?threads, "inferring CPU counts");
            (
                cores.unwrap_or(family_cores),
                threads.unwrap_or(family_threads),
            )
        }
    };

    CpuInfo {
        model: model.unwrap_or(UNKNOWN_CPU).to_string(),
        cores,
        threads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_inference_from_model() {
        let cpu = parse_cpu("Processor: Intel(R) Core(TM) i7-10700K @ 3.80GHz\n");
        assert_eq!(cpu.model, "Intel(R) Core(TM) i7-10700K @ 3.80GHz");
        assert_eq!((cpu.cores, cpu.threads), (8, 16));
    }

    #[test]
    fn test_explicit_counts_bypass_inference() {
        let text = "Processor: Intel(R) Core(TM) i3-10100\nTopology: 10-Core, 20 Threads\n";
        let cpu = parse_cpu(text);
        assert_eq!((cpu.cores, cpu.threads), (10, 20));

        let text = "Processor: AMD Ryzen 5 5600X 6-Core Processor (12 CPUs), ~3.7GHz\n";
        let cpu = parse_cpu(text);
        assert_eq!((cpu.cores, cpu.threads), (6, 12));
    }

    #[test]
    fn test_partial_counts_keep_explicit_value() {
        // DxDiag reports logical processors as "(16 CPUs)" and never a core count
        let text = "Processor: Intel(R) Core(TM) i9-9900K CPU @ 3.60GHz (16 CPUs), ~3.6GHz\n";
        let cpu = parse_cpu(text);
        assert_eq!((cpu.cores, cpu.threads), (12, 16));
    }

    #[test]
    fn test_families() {
        let cases = [
            ("Intel(R) Core(TM) i3-8100", (4, 8)),
            ("AMD Ryzen 3 3200G", (4, 8)),
            ("Intel(R) Core(TM) i5-12400F", (6, 12)),
            ("AMD Ryzen 7 5800X3D", (8, 16)),
            ("AMD Ryzen 9 7950X", (12, 24)),
            ("Intel(R) Xeon(R) W-2245", (12, 24)),
            ("AMD Ryzen Threadripper 3970X", (12, 24)),
            ("Apple M1", (6, 12)),
        ];
        for (model, expected) in cases {
            let cpu = parse_cpu(&format!("Processor: {}\n", model));
            assert_eq!((cpu.cores, cpu.threads), expected, "{}", model);
        }
    }

    #[test]
    fn test_localized_labels() {
        let cpu = parse_cpu("프로세서: AMD Ryzen 5 3600\n");
        assert_eq!(cpu.model, "AMD Ryzen 5 3600");
        assert_eq!((cpu.cores, cpu.threads), (6, 12));

        let cpu = parse_cpu("처리기: Intel(R) Core(TM) i9-12900K\n");
        assert_eq!((cpu.cores, cpu.threads), (12, 24));
    }

    #[test]
    fn test_processor_label_is_case_sensitive() {
        let cpu = parse_cpu("processor: Intel(R) Core(TM) i7-9700\n");
        assert_eq!(cpu.model, UNKNOWN_CPU);
        assert_eq!((cpu.cores, cpu.threads), (6, 12));
    }

    #[test]
    fn test_zero_counts_are_ignored() {
        let cpu = parse_cpu("Processor: Intel(R) Core(TM) i5-4460 0-Core 0 Threads\n");
        assert_eq!((cpu.cores, cpu.threads), (6, 12));
    }

    #[test]
    fn test_no_processor_line() {
        let cpu = parse_cpu("nothing useful here");
        assert_eq!(cpu, CpuInfo::default());
    }

    #[test]
    fn test_detect_family() {
        assert_eq!(CpuFamily::detect("Core i5"), Some(CpuFamily::Mainstream));
        assert_eq!(CpuFamily::detect("EPYC 7763"), None);
    }
}
