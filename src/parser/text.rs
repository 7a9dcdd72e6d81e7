// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Label lookup and windowing over report text

use regex::Regex;

/// A labelled value found in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMatch<'a> {
    /// Byte offset of the label in the searched text
    pub start: usize,
    /// Rest of the line after the label, trimmed
    pub value: &'a str,
}

/// Compile a label fragment into a regex capturing the rest of its line.
pub fn label_regex(fragment: &str, case_insensitive: bool) -> Regex {
    let flags = if case_insensitive { "(?i)" } else { "" };
    Regex::new(&format!("{flags}(?:{fragment})[ \\t]*([^\\n]*)")).expect("label pattern is valid")
}

pub fn compile_labels(fragments: &[&str], case_insensitive: bool) -> Vec<Regex> {
    fragments
        .iter()
        .map(|fragment| label_regex(fragment, case_insensitive))
        .collect()
}

/// First non-empty value across `labels`, trying each label in order.
///
/// Only the first occurrence of each label is considered.
pub fn first_value<'a>(text: &'a str, labels: &[Regex]) -> Option<LabelMatch<'a>> {
    labels.iter().find_map(|label| {
        let caps = label.captures(text)?;
        let whole = caps.get(0)?;
        let value = caps.get(1)?.as_str().trim();
        (!value.is_empty()).then_some(LabelMatch {
            start: whole.start(),
            value,
        })
    })
}

/// Every occurrence of `label`, in text order.
pub fn all_values<'a>(text: &'a str, label: &Regex) -> Vec<LabelMatch<'a>> {
    label
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(LabelMatch {
                start: whole.start(),
                value: caps.get(1).map_or("", |m| m.as_str().trim()),
            })
        })
        .collect()
}

/// Byte bounds of up to `radius` characters either side of byte offset
/// `pos`.
///
/// `pos` must lie on a char boundary; the bounds never split a character.
pub fn window_bounds(text: &str, pos: usize, radius: usize) -> (usize, usize) {
    let pos = pos.min(text.len());
    let begin = if radius == 0 {
        pos
    } else {
        text[..pos]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map_or(0, |(index, _)| index)
    };
    let end = text[pos..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(offset, _)| pos + offset);

    (begin, end)
}

/// Up to `radius` characters either side of byte offset `pos`.
pub fn char_window(text: &str, pos: usize, radius: usize) -> &str {
    let (begin, end) = window_bounds(text, pos, radius);
    &text[begin..end]
}

/// The labelled value nearest to `pos` within `radius` characters.
///
/// The part after `pos` is searched first, in label order, taking the first
/// occurrence. Failing that, the part before `pos` is searched, taking the
/// last occurrence. Offsets in the result are relative to `text`.
pub fn nearest_value<'a>(
    text: &'a str,
    pos: usize,
    radius: usize,
    labels: &[Regex],
) -> Option<LabelMatch<'a>> {
    let (begin, end) = window_bounds(text, pos, radius);
    let pos = pos.min(text.len());

    if let Some(found) = first_value(&text[pos..end], labels) {
        return Some(LabelMatch {
            start: pos + found.start,
            value: found.value,
        });
    }

    let before = &text[begin..pos];
    labels.iter().find_map(|label| {
        all_values(before, label)
            .into_iter()
            .rev()
            .find(|found| !found.value.is_empty())
            .map(|found| LabelMatch {
                start: begin + found.start,
                value: found.value,
            })
    })
}
