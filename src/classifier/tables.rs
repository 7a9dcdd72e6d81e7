// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU tier tables
//!
//! Patterns are matched as substrings of the normalized identity (lowercase,
//! single spaces, series prefix split from the model number). Within a
//! vendor the lookup order is overrides, models, generations; the first hit
//! wins. Model lists run from the strongest tier down so that a longer SKU
//! name (`rtx 3060 ti`) is always tested before its prefix (`rtx 3060`).
//!
//! A generation default never ranks above the weakest listed card of its
//! series, so an unlisted low-end SKU cannot outrank a listed stronger one.

use super::GpuVendor;
use crate::hardware::Tier;

/// A substring pattern and the tier it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRule {
    pub pattern: &'static str,
    pub tier: Tier,
}

const fn rule(pattern: &'static str, tier: Tier) -> ModelRule {
    ModelRule { pattern, tier }
}

/// Tier rules for one GPU vendor
#[derive(Debug, Clone, Copy)]
pub struct VendorTable {
    pub vendor: GpuVendor,
    /// Any of these in the identity selects this vendor
    pub keywords: &'static [&'static str],
    /// Known cards whose tier differs from what their generation suggests
    pub overrides: &'static [ModelRule],
    pub models: &'static [ModelRule],
    /// Series-level defaults for cards missing from `models`
    pub generations: &'static [ModelRule],
}

impl VendorTable {
    /// Every rule in lookup order
    pub fn rules(&self) -> impl Iterator<Item = &ModelRule> {
        self.overrides
            .iter()
            .chain(self.models.iter())
            .chain(self.generations.iter())
    }
}

/// Tier for identities that match no vendor, or no rule within a vendor
pub const FALLBACK_TIER: Tier = Tier::Medium;

/// A texture limit at or below this lowers the tier by one step
pub const SMALL_TEXTURE_LIMIT: u32 = 4096;
/// A texture limit at or above this raises the tier by one step
pub const LARGE_TEXTURE_LIMIT: u32 = 16384;

pub const NVIDIA: VendorTable = VendorTable {
    vendor: GpuVendor::Nvidia,
    keywords: &["nvidia", "geforce", "quadro", "rtx", "gtx"],
    overrides: &[
        rule("rtx 4050", Tier::Medium),
        rule("rtx 3060 ti", Tier::High),
        rule("rtx 2080 ti", Tier::High),
        rule("gtx 1050 ti", Tier::Low),
        rule("gtx 1660", Tier::Medium),
    ],
    models: &[
        rule("rtx 5090", Tier::Ultra),
        rule("rtx 5080", Tier::Ultra),
        rule("rtx 4090", Tier::Ultra),
        rule("rtx 4080", Tier::Ultra),
        rule("rtx 3090", Tier::Ultra),
        rule("rtx 5070", Tier::High),
        rule("rtx 5060", Tier::High),
        rule("rtx 4070", Tier::High),
        rule("rtx 4060", Tier::High),
        rule("rtx 3080", Tier::High),
        rule("rtx 3070", Tier::High),
        rule("rtx 5050", Tier::Medium),
        rule("rtx 3060", Tier::Medium),
        rule("rtx 3050", Tier::Medium),
        rule("rtx 2080", Tier::Medium),
        rule("rtx 2070", Tier::Medium),
        rule("gtx 1080", Tier::Medium),
        rule("gtx 1650", Tier::Low),
        rule("gtx 1070", Tier::Low),
        rule("gtx 1060", Tier::Low),
        rule("rtx 2060", Tier::Low),
        rule("rtx 2050", Tier::Low),
        rule("gtx 1050", Tier::Minimum),
    ],
    generations: &[
        rule("rtx 50", Tier::Medium),
        rule("rtx 40", Tier::Medium),
        rule("rtx 30", Tier::Medium),
        rule("rtx 20", Tier::Low),
        rule("gtx 16", Tier::Low),
        rule("gtx 10", Tier::Minimum),
        rule("gtx 9", Tier::Minimum),
        rule("gtx 8", Tier::Minimum),
        rule("gtx 7", Tier::Minimum),
        rule("mx", Tier::Minimum),
        rule("gt ", Tier::Minimum),
    ],
};

pub const AMD: VendorTable = VendorTable {
    vendor: GpuVendor::Amd,
    keywords: &["amd", "radeon"],
    overrides: &[rule("rx 6400", Tier::Low), rule("rx 5300", Tier::Minimum)],
    models: &[
        rule("rx 7900 xt", Tier::Ultra),
        rule("rx 7900 gre", Tier::High),
        rule("rx 7800 xt", Tier::High),
        rule("rx 7700 xt", Tier::High),
        rule("rx 6950 xt", Tier::High),
        rule("rx 6900 xt", Tier::High),
        rule("rx 6800 xt", Tier::High),
        rule("rx 7600", Tier::Medium),
        rule("rx 6800", Tier::Medium),
        rule("rx 6750 xt", Tier::Medium),
        rule("rx 6700", Tier::Medium),
        rule("rx 6650 xt", Tier::Medium),
        rule("vega 64", Tier::Medium),
        rule("vega 56", Tier::Medium),
        rule("rx 6600", Tier::Low),
        rule("rx 6500", Tier::Low),
        rule("rx 6300", Tier::Low),
        rule("rx 5700", Tier::Low),
        rule("rx 5600", Tier::Low),
        rule("rx 590", Tier::Low),
        rule("rx 580", Tier::Low),
        rule("rx 570", Tier::Low),
        rule("rx 5500", Tier::Minimum),
        rule("rx 560", Tier::Minimum),
        rule("rx 550", Tier::Minimum),
        rule("rx 540", Tier::Minimum),
    ],
    generations: &[
        rule("rx 7", Tier::Medium),
        rule("rx 6", Tier::Low),
        rule("rx 5", Tier::Minimum),
        rule("rx 4", Tier::Low),
        rule("vega", Tier::Low),
        rule("radeon hd", Tier::Minimum),
    ],
};

pub const INTEL: VendorTable = VendorTable {
    vendor: GpuVendor::Intel,
    keywords: &["intel", "hd graphics", "uhd graphics", "iris"],
    overrides: &[],
    models: &[
        rule("arc b580", Tier::Medium),
        rule("arc b570", Tier::Medium),
        rule("arc a770", Tier::Medium),
        rule("arc a750", Tier::Medium),
        rule("arc a580", Tier::Low),
        rule("arc a380", Tier::Low),
        rule("arc a310", Tier::Low),
        rule("iris xe", Tier::Low),
        rule("iris plus", Tier::Minimum),
        rule("iris pro", Tier::Minimum),
    ],
    generations: &[
        rule("arc", Tier::Low),
        rule("iris", Tier::Minimum),
        rule("uhd graphics", Tier::Minimum),
        rule("hd graphics", Tier::Minimum),
    ],
};

/// Vendor tables in dispatch order
pub const VENDOR_TABLES: [VendorTable; 3] = [NVIDIA, AMD, INTEL];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rules() -> impl Iterator<Item = &'static ModelRule> {
        VENDOR_TABLES.iter().flat_map(|table| {
            table
                .overrides
                .iter()
                .chain(table.models.iter())
                .chain(table.generations.iter())
        })
    }

    #[test]
    fn test_patterns_are_normalized() {
        for rule in all_rules() {
            assert_eq!(
                rule.pattern,
                rule.pattern.to_lowercase(),
                "pattern '{}' must be lowercase",
                rule.pattern
            );
            assert!(!rule.pattern.contains("  "), "pattern '{}'", rule.pattern);
        }
    }

    #[test]
    fn test_models_ordered_strongest_first() {
        for table in VENDOR_TABLES {
            for pair in table.models.windows(2) {
                assert!(
                    pair[0].tier >= pair[1].tier,
                    "{:?}: '{}' listed before stronger '{}'",
                    table.vendor,
                    pair[0].pattern,
                    pair[1].pattern
                );
            }
        }
    }

    #[test]
    fn test_no_model_is_shadowed_by_an_earlier_prefix() {
        for table in VENDOR_TABLES {
            let rules: Vec<&ModelRule> = table.overrides.iter().chain(table.models.iter()).collect();
            for (i, later) in rules.iter().enumerate() {
                for earlier in &rules[..i] {
                    if later.pattern.contains(earlier.pattern) {
                        assert_eq!(
                            later.tier, earlier.tier,
                            "'{}' is unreachable behind '{}'",
                            later.pattern, earlier.pattern
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_generation_defaults_stay_at_the_series_floor() {
        for table in VENDOR_TABLES {
            for generation in table.generations {
                for listed in table.overrides.iter().chain(table.models.iter()) {
                    if listed.pattern.starts_with(generation.pattern) {
                        assert!(
                            generation.tier <= listed.tier,
                            "{:?}: series '{}' ({:?}) ranks above listed '{}' ({:?})",
                            table.vendor,
                            generation.pattern,
                            generation.tier,
                            listed.pattern,
                            listed.tier
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_vendor_keywords_are_disjoint() {
        for (i, table) in VENDOR_TABLES.iter().enumerate() {
            for other in &VENDOR_TABLES[i + 1..] {
                for keyword in table.keywords {
                    assert!(!other.keywords.contains(keyword));
                }
            }
        }
    }

    #[test]
    fn test_texture_limits_ordered() {
        assert!(SMALL_TEXTURE_LIMIT < LARGE_TEXTURE_LIMIT);
    }
}
