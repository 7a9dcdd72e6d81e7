// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Recognised labels and markers for diagnostic reports
//!
//! Everything here is data. Each list is evaluated top-down and the first
//! hit wins, so order matters. Labels are regex fragments (case handling is
//! decided by the list that holds them); the compiled forms live in
//! [`super::text`].

use super::cpu::CpuFamily;
use crate::classifier::GpuVendor;

/// Bumped whenever a label list below changes meaning.
pub const LABEL_SET_VERSION: u32 = 3;

/// Characters kept on either side of a card-name match when mining its
/// sibling fields.
pub const WINDOW_RADIUS: usize = 500;

/// Card names shorter than this (in characters) are discarded.
pub const MIN_CARD_NAME_CHARS: usize = 4;

/// Card names that mean "nothing here", compared case-insensitively.
pub const PLACEHOLDER_NAMES: &[&str] = &["N/A", "Not Available", "None"];

/// Processor labels, matched case-sensitively.
pub const PROCESSOR_LABELS: &[&str] = &[
    r"Processor:",
    r"프로세서:",
    r"처리기:",
    r"CPU:",
    r"Processor\s+Information:",
];

/// Explicit core count anywhere in the report (`8-Core`, `8 Core`).
pub const CORE_COUNT_PATTERN: &str = r"(?i)(\d+)[ -]Core";
/// Explicit logical processor count (`16 CPUs`, `16-Thread`, `16Threads`).
pub const THREAD_COUNT_PATTERN: &str = r"(?i)(\d+)[ -]?(?:Thread|CPUs)";

/// CPU family markers, tested as substrings of the lowercased model.
pub const CPU_FAMILY_MARKERS: &[(CpuFamily, &[&str])] = &[
    (CpuFamily::Entry, &["i3", "ryzen 3"]),
    (CpuFamily::Mainstream, &["i5", "ryzen 5"]),
    (CpuFamily::Performance, &["i7", "ryzen 7"]),
    (CpuFamily::Enthusiast, &["i9", "ryzen 9"]),
    (CpuFamily::Workstation, &["xeon", "threadripper"]),
];

/// Memory labels, matched case-insensitively.
pub const MEMORY_LABELS: &[&str] = &[
    r"Memory:",
    r"Installed Memory:",
    r"Installed RAM:",
    r"RAM:",
    r"System Memory:",
    r"Total Memory:",
];

/// A display section: the text between `header` and the next `terminator`.
#[derive(Debug, Clone, Copy)]
pub struct SectionBoundary {
    pub header: &'static str,
    pub terminator: &'static str,
}

const fn section(header: &'static str, terminator: &'static str) -> SectionBoundary {
    SectionBoundary { header, terminator }
}

/// Display section boundaries, matched case-insensitively.
pub const DISPLAY_SECTIONS: &[SectionBoundary] = &[
    section(r"-{15}\s*Display Devices\s*-{15}", r"-{15}"),
    section(r"-{15}\s*디스플레이 장치\s*-{15}", r"-{15}"),
    section(r"-{12}\s*Display Devices\s*-{12}", r"-{12}"),
    section(r"-{12}\s*디스플레이 장치\s*-{12}", r"-{12}"),
    section(r"Display Devices:", r"-{15}"),
    section(r"디스플레이 장치:", r"-{15}"),
    section(r"Display Tab 1:", r"Sound Tab|Input Tab|-{15}"),
];

/// Card-name labels, matched case-insensitively. The first label with any
/// match supplies every candidate.
pub const CARD_NAME_LABELS: &[&str] = &[
    r"Card name:",
    r"카드 이름:",
    r"Name:",
    r"이름:",
    r"Display adapter:",
    r"디스플레이 어댑터:",
    r"그래픽 카드:",
];

/// Fields mined from the window around a card name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingField {
    Chip,
    Manufacturer,
    DedicatedMemory,
    DriverVersion,
}

impl SiblingField {
    pub const ALL: [SiblingField; 4] = [
        SiblingField::Chip,
        SiblingField::Manufacturer,
        SiblingField::DedicatedMemory,
        SiblingField::DriverVersion,
    ];

    /// Labels for this field, matched case-insensitively, first hit wins.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            SiblingField::Chip => &[r"Chip (?:type|name):", r"칩 (?:유형|이름):"],
            SiblingField::Manufacturer => &[r"Manufacturer:", r"제조업체:"],
            SiblingField::DedicatedMemory => &[
                r"Dedicated Memory:",
                r"전용 메모리:",
                r"(?:VRAM|Graphics Memory):",
            ],
            SiblingField::DriverVersion => &[r"Driver Version:", r"드라이버 버전:"],
        }
    }
}

/// Brand phrase searched for when no labelled card survives
#[derive(Debug, Clone, Copy)]
pub struct BrandPhrase {
    pub phrase: &'static str,
    pub vendor: GpuVendor,
}

const fn brand(phrase: &'static str, vendor: GpuVendor) -> BrandPhrase {
    BrandPhrase { phrase, vendor }
}

pub const BRAND_PHRASES: &[BrandPhrase] = &[
    brand("NVIDIA GeForce", GpuVendor::Nvidia),
    brand("NVIDIA RTX", GpuVendor::Nvidia),
    brand("NVIDIA GTX", GpuVendor::Nvidia),
    brand("AMD Radeon", GpuVendor::Amd),
    brand("AMD RX", GpuVendor::Amd),
    brand("Radeon RX", GpuVendor::Amd),
    brand("Intel Arc", GpuVendor::Intel),
    brand("Intel Iris", GpuVendor::Intel),
    brand("Intel HD Graphics", GpuVendor::Intel),
    brand("Intel UHD Graphics", GpuVendor::Intel),
];

/// Model-number expression tried after the brand phrases
#[derive(Debug, Clone, Copy)]
pub struct GenericModelPattern {
    pub pattern: &'static str,
    pub vendor: GpuVendor,
}

pub const GENERIC_MODEL_PATTERNS: &[GenericModelPattern] = &[
    GenericModelPattern {
        pattern: r"(?i)(?:RTX|GTX)\s+\d{3,4}(?:\s+Ti)?",
        vendor: GpuVendor::Nvidia,
    },
    GenericModelPattern {
        pattern: r"(?i)Radeon\s+(?:RX\s+)?\d{3,4}(?:\s+XT)?",
        vendor: GpuVendor::Amd,
    },
    GenericModelPattern {
        pattern: r"(?i)Intel\s+(?:Arc|Iris|HD|UHD)\s+\w+",
        vendor: GpuVendor::Intel,
    },
];

/// A card is integrated when, for some rule, every keyword group has at
/// least one member in the lowercased card name.
pub const INTEGRATED_MARKERS: &[&[&[&str]]] = &[
    &[&["intel", "hd graphics", "uhd graphics", "iris", "gma"]],
    &[&["amd", "ati"], &["radeon"], &["vega", "graphics", "igpu"]],
    &[&["nvidia"], &["mx", "integrated", "onboard"]],
];

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_all_label_patterns_compile() {
        let fragments = PROCESSOR_LABELS
            .iter()
            .chain(MEMORY_LABELS)
            .chain(CARD_NAME_LABELS)
            .chain(
                SiblingField::ALL
                    .into_iter()
                    .flat_map(|field| field.labels().iter()),
            );
        for fragment in fragments {
            assert!(Regex::new(fragment).is_ok(), "bad label '{}'", fragment);
        }
    }

    #[test]
    fn test_section_and_model_patterns_compile() {
        for boundary in DISPLAY_SECTIONS {
            assert!(Regex::new(boundary.header).is_ok());
            assert!(Regex::new(boundary.terminator).is_ok());
        }
        for generic in GENERIC_MODEL_PATTERNS {
            assert!(Regex::new(generic.pattern).is_ok());
        }
        assert!(Regex::new(CORE_COUNT_PATTERN).is_ok());
        assert!(Regex::new(THREAD_COUNT_PATTERN).is_ok());
    }

    #[test]
    fn test_every_family_has_markers() {
        for (_, markers) in CPU_FAMILY_MARKERS {
            assert!(!markers.is_empty());
            for marker in *markers {
                assert_eq!(*marker, marker.to_lowercase());
            }
        }
    }

    #[test]
    fn test_integrated_markers_are_lowercase() {
        for rule in INTEGRATED_MARKERS {
            for group in *rule {
                for keyword in *group {
                    assert_eq!(*keyword, keyword.to_lowercase());
                }
            }
        }
    }

    #[test]
    fn test_brand_phrases_have_vendors() {
        for phrase in BRAND_PHRASES {
            assert_ne!(phrase.vendor, GpuVendor::Unknown);
        }
    }
}
