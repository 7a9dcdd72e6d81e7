// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display adapter extraction
//!
//! Candidates come from card-name labels inside the display section. When
//! none survive the sanity filter, the whole report is searched for brand
//! phrases and then for bare model numbers.

use regex::Regex;
use std::sync::OnceLock;

use super::patterns::{
    SiblingField, BRAND_PHRASES, CARD_NAME_LABELS, DISPLAY_SECTIONS, GENERIC_MODEL_PATTERNS,
    INTEGRATED_MARKERS, MIN_CARD_NAME_CHARS, PLACEHOLDER_NAMES, WINDOW_RADIUS,
};
use super::text::{all_values, compile_labels, nearest_value};
use crate::classifier::{classify, detect_vendor, ClassifyOptions};
use crate::hardware::{GpuCardDetail, GpuInfo};

fn section_regexes() -> &'static [(Regex, Regex)] {
    static SECTIONS: OnceLock<Vec<(Regex, Regex)>> = OnceLock::new();
    SECTIONS.get_or_init(|| {
        DISPLAY_SECTIONS
            .iter()
            .map(|boundary| {
                (
                    Regex::new(&format!("(?i){}", boundary.header)).unwrap(),
                    Regex::new(&format!("(?i){}", boundary.terminator)).unwrap(),
                )
            })
            .collect()
    })
}

fn card_name_labels() -> &'static [Regex] {
    static LABELS: OnceLock<Vec<Regex>> = OnceLock::new();
    LABELS.get_or_init(|| compile_labels(CARD_NAME_LABELS, true))
}

fn sibling_labels(field: SiblingField) -> &'static [Regex] {
    static LABELS: OnceLock<Vec<Vec<Regex>>> = OnceLock::new();
    let all = LABELS.get_or_init(|| {
        SiblingField::ALL
            .iter()
            .map(|field| compile_labels(field.labels(), true))
            .collect()
    });
    &all[field as usize]
}

fn brand_regexes() -> &'static [Regex] {
    static BRANDS: OnceLock<Vec<Regex>> = OnceLock::new();
    BRANDS.get_or_init(|| {
        BRAND_PHRASES
            .iter()
            .map(|brand| {
                Regex::new(&format!(r"(?i){}[\w \t()®™-]*", regex::escape(brand.phrase))).unwrap()
            })
            .collect()
    })
}

fn generic_regexes() -> &'static [Regex] {
    static GENERIC: OnceLock<Vec<Regex>> = OnceLock::new();
    GENERIC.get_or_init(|| {
        GENERIC_MODEL_PATTERNS
            .iter()
            .map(|generic| Regex::new(generic.pattern).unwrap())
            .collect()
    })
}

/// The display-devices section of a report, if one is framed.
///
/// A header only counts when its terminator follows it.
pub fn display_section(text: &str) -> Option<&str> {
    section_regexes().iter().find_map(|(header, terminator)| {
        header.find_iter(text).find_map(|found| {
            let rest = &text[found.end()..];
            let end = terminator.find(rest)?;
            let body = &rest[..end.start()];
            (!body.trim().is_empty()).then_some(body)
        })
    })
}

/// Whether a card name looks like an integrated GPU.
///
/// An empty name counts as integrated.
pub fn is_integrated(card_name: &str) -> bool {
    if card_name.is_empty() {
        return true;
    }
    let lowered = card_name.to_lowercase();
    INTEGRATED_MARKERS.iter().any(|rule| {
        rule.iter()
            .all(|group| group.iter().any(|keyword| lowered.contains(keyword)))
    })
}

fn is_plausible_name(name: &str) -> bool {
    name.chars().count() >= MIN_CARD_NAME_CHARS
        && !PLACEHOLDER_NAMES
            .iter()
            .any(|placeholder| name.eq_ignore_ascii_case(placeholder))
}

fn mine(text: &str, pos: usize, field: SiblingField) -> String {
    nearest_value(text, pos, WINDOW_RADIUS, sibling_labels(field))
        .map(|found| found.value.to_string())
        .unwrap_or_default()
}

/// A card named at byte offset `pos`, with its sibling fields mined from
/// the surrounding window.
fn card_at(card_name: &str, text: &str, pos: usize) -> GpuCardDetail {
    GpuCardDetail {
        card_name: card_name.to_string(),
        chip_name: mine(text, pos, SiblingField::Chip),
        manufacturer: mine(text, pos, SiblingField::Manufacturer),
        dedicated_memory_text: mine(text, pos, SiblingField::DedicatedMemory),
        driver_version: mine(text, pos, SiblingField::DriverVersion),
        is_integrated: is_integrated(card_name),
    }
}

/// Cards named by the first card-name label that matches anything.
///
/// Each card's sibling fields are searched only up to the next card-name
/// match, so one adapter never borrows another's values.
fn labelled_cards(scope: &str) -> Vec<GpuCardDetail> {
    let Some(matches) = card_name_labels()
        .iter()
        .map(|label| all_values(scope, label))
        .find(|matches| !matches.is_empty())
    else {
        return Vec::new();
    };

    let total = matches.len();
    let bounds: Vec<(usize, usize)> = matches
        .iter()
        .enumerate()
        .map(|(i, found)| {
            let lower = if i == 0 { 0 } else { found.start };
            let upper = matches.get(i + 1).map_or(scope.len(), |next| next.start);
            (lower, upper)
        })
        .collect();

    let cards: Vec<GpuCardDetail> = matches
        .iter()
        .zip(bounds)
        .filter(|(found, _)| is_plausible_name(found.value))
        .map(|(found, (lower, upper))| {
            card_at(found.value, &scope[lower..upper], found.start - lower)
        })
        .collect();

    tracing::debug!(total, kept = cards.len(), "card-name candidates");
    cards
}

fn brand_phrase_card(text: &str) -> Option<GpuCardDetail> {
    BRAND_PHRASES
        .iter()
        .zip(brand_regexes())
        .find_map(|(brand, regex)| {
            let found = regex.find(text)?;
            let mut card = card_at(found.as_str().trim(), text, found.start());
            if card.manufacturer.is_empty() {
                card.manufacturer = brand.vendor.name().to_string();
            }
            Some(card)
        })
}

fn generic_model_card(text: &str) -> Option<GpuCardDetail> {
    GENERIC_MODEL_PATTERNS
        .iter()
        .zip(generic_regexes())
        .find_map(|(generic, regex)| {
            let name = regex.find(text)?.as_str().trim();
            Some(GpuCardDetail {
                card_name: name.to_string(),
                manufacturer: generic.vendor.name().to_string(),
                is_integrated: is_integrated(name),
                ..GpuCardDetail::default()
            })
        })
}

/// Pick the primary card: first discrete, else first integrated.
fn summarize(cards: Vec<GpuCardDetail>) -> GpuInfo {
    let primary = cards
        .iter()
        .find(|card| !card.is_integrated)
        .or_else(|| cards.iter().find(|card| card.is_integrated))
        .or_else(|| cards.first())
        .cloned();

    let Some(primary) = primary else {
        tracing::debug!("no GPU detected");
        return GpuInfo::default();
    };

    let vendor = if primary.manufacturer.is_empty() {
        detect_vendor(&primary.card_name).name().to_string()
    } else {
        primary.manufacturer.clone()
    };

    GpuInfo {
        tier: classify(&primary.card_name, ClassifyOptions::default()),
        model: primary.card_name,
        chip_name: primary.chip_name,
        vendor,
        dedicated_memory_text: primary.dedicated_memory_text,
        details: cards,
    }
}

/// Extract every display adapter and classify the primary one.
pub fn parse_gpu(text: &str) -> GpuInfo {
    let scope = display_section(text).unwrap_or_else(|| {
        tracing::debug!("no display section, searching the whole report");
        text
    });

    let mut cards = labelled_cards(scope);
    if cards.is_empty() {
        cards = brand_phrase_card(text)
            .or_else(|| generic_model_card(text))
            .into_iter()
            .collect();
        tracing::debug!(found = !cards.is_empty(), "fallback GPU search");
    }

    summarize(cards)
}
