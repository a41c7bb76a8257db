// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::CommitType;

/// Emoji glyphs registered per prefix tag. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiTable {
    glyphs: BTreeMap<String, Vec<String>>,
}

impl EmojiTable {
    /// Table with no tags; every prefix is rendered without a glyph.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let glyphs = CommitType::VARIANTS
            .iter()
            .map(|ct| {
                let set: &[&str] = match ct {
                    CommitType::Feat => &["✨", "🎉", "🚀"],
                    CommitType::Fix => &["🐛", "🩹", "🚑️"],
                    CommitType::Docs => &["📝", "📚"],
                    CommitType::Style => &["🎨", "💄"],
                    CommitType::Refactor => &["♻️", "🔨"],
                    CommitType::Perf => &["⚡️", "🐎"],
                    CommitType::Test => &["✅", "🧪"],
                    CommitType::Chore => &["🔧", "📦️", "🧹"],
                };
                (
                    ct.as_str().to_string(),
                    set.iter().map(|g| (*g).to_string()).collect(),
                )
            })
            .collect();
        Self { glyphs }
    }

    /// Parse a JSON object of `tag -> [glyph, ...]`.
    pub fn from_json(input: &str) -> Result<Self, String> {
        let table: Self = serde_json::from_str(input).map_err(|e| e.to_string())?;
        table.validate()?;
        Ok(table)
    }

    /// Parse a TOML table of `tag = [glyph, ...]`.
    pub fn from_toml(input: &str) -> Result<Self, String> {
        let table: Self = toml::from_str(input).map_err(|e| e.to_string())?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), String> {
        for (tag, glyphs) in &self.glyphs {
            if tag.trim().is_empty() {
                return Err("empty tag".into());
            }
            if glyphs.is_empty() {
                return Err(format!("tag '{tag}' has no emoji"));
            }
            if glyphs.iter().any(|g| g.trim().is_empty()) {
                return Err(format!("tag '{tag}' has a blank emoji"));
            }
        }
        Ok(())
    }

    pub fn glyphs(&self, tag: &str) -> Option<&[String]> {
        self.glyphs.get(tag).map(Vec::as_slice)
    }

    /// Uniform pick among the glyphs registered for `tag`.
    pub fn choose<R: Rng + ?Sized>(&self, tag: &str, rng: &mut R) -> Option<&str> {
        self.glyphs
            .get(tag)
            .and_then(|set| set.choose(rng))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.glyphs.iter().map(|(t, g)| (t.as_str(), g.as_slice()))
    }
}
