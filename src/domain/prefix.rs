// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use super::CommitType;

/// Ordered list of prefix labels shown by the prompt.
///
/// Each label is a tag followed by a colon and a description, for example
/// `feat: A new feature`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixChoices {
    labels: Vec<String>,
}

impl PrefixChoices {
    /// Returns `None` when `labels` is empty or any label has a blank tag.
    pub fn new(labels: Vec<String>) -> Option<Self> {
        if labels.is_empty() || labels.iter().any(|l| tag_of(l).trim().is_empty()) {
            return None;
        }
        Some(Self { labels })
    }

    pub fn builtin() -> Self {
        Self {
            labels: CommitType::VARIANTS.iter().map(CommitType::label).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn tag(&self, index: usize) -> Option<&str> {
        self.get(index).map(tag_of)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| tag_of(l))
    }
}

/// Text up to the first colon, taken verbatim; the whole label if it has
/// no colon.
pub fn tag_of(label: &str) -> &str {
    label.split_once(':').map_or(label, |(tag, _)| tag)
}
