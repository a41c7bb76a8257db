// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
}

impl CommitType {
    /// Every built-in type, in the order the prompt lists them.
    pub const VARIANTS: [CommitType; 8] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Chore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Chore => "chore",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Feat => "A new feature",
            Self::Fix => "A bug fix",
            Self::Docs => "Documentation only changes",
            Self::Style => {
                "Changes that do not affect the code meaning (white-space, formatting, etc.)"
            }
            Self::Refactor => "A code change that neither fixes a bug nor adds a feature",
            Self::Perf => "A code change that improves performance",
            Self::Test => "Adding missing tests or correcting existing tests",
            Self::Chore => "Other changes that don't modify src or test files",
        }
    }

    /// Prompt label, e.g. `feat: A new feature`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.as_str(), self.description())
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
