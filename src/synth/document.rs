// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The boot.config document

use serde::{Deserialize, Serialize};

/// Groups of lines, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    CoreRender,
    GpuTier,
    Platform,
    RuntimeVersion,
    MemoryAllocator,
    Misc,
}

/// One `key=value` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLine {
    pub section: Section,
    pub key: String,
    pub value: String,
}

/// Ordered `key=value` lines; each key appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    lines: Vec<ConfigLine>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. A key that is already present keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, section: Section, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.lines.iter_mut().find(|line| line.key == key) {
            Some(existing) => existing.value = value,
            None => self.lines.push(ConfigLine {
                section,
                key: key.to_string(),
                value,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.key == key)
            .map(|line| line.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.key.as_str())
    }

    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    pub fn lines_in(&self, section: Section) -> impl Iterator<Item = &ConfigLine> {
        self.lines.iter().filter(move |line| line.section == section)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newline-separated `key=value` text, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}={}", line.key, line.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
