// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Classification of capability-probe results
//!
//! A capability probe is whatever a graphics API reports about the active
//! adapter: an unmasked vendor and renderer string, plus the largest
//! texture it supports.

use serde::{Deserialize, Serialize};

use super::{classify, detect_vendor, ClassifyOptions, GpuVendor};
use crate::hardware::{GpuCardDetail, GpuInfo, UNKNOWN_GPU};

/// Values read from a graphics capability probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProbe {
    pub vendor: String,
    pub renderer: String,
    pub max_texture_size: Option<u32>,
}

impl CapabilityProbe {
    pub fn new(vendor: impl Into<String>, renderer: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            renderer: renderer.into(),
            max_texture_size: None,
        }
    }

    pub fn with_max_texture_size(mut self, size: u32) -> Self {
        self.max_texture_size = Some(size);
        self
    }
}

/// Turn a capability probe into a [`GpuInfo`] with a single adapter entry.
pub fn classify_probe(probe: &CapabilityProbe) -> GpuInfo {
    let renderer = probe.renderer.trim();
    let model = if renderer.is_empty() {
        UNKNOWN_GPU.to_string()
    } else {
        renderer.to_string()
    };

    let options = ClassifyOptions {
        max_texture_size: probe.max_texture_size,
    };
    let tier = classify(renderer, options);

    // The renderer string usually names the vendor too; the vendor field is
    // only consulted when it does not.
    let vendor = match detect_vendor(renderer) {
        GpuVendor::Unknown => detect_vendor(&probe.vendor),
        known => known,
    };
    let vendor_name = match vendor {
        GpuVendor::Unknown => probe.vendor.trim().to_string(),
        known => known.name().to_string(),
    };

    GpuInfo {
        model: model.clone(),
        chip_name: String::new(),
        vendor: vendor_name.clone(),
        tier,
        dedicated_memory_text: String::new(),
        details: vec![GpuCardDetail {
            card_name: model,
            manufacturer: vendor_name,
            is_integrated: vendor == GpuVendor::Intel,
            ..GpuCardDetail::default()
        }],
    }
}
