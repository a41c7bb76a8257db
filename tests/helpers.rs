// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::VecDeque;

use commitmoji::domain::{EmojiTable, PrefixChoices};
use commitmoji::error::{Error, Result};
use commitmoji::services::git::Committer;
use commitmoji::services::terminal::{KeySource, Screen};
use console::Key;

/// Two-choice list used by most scenarios: `feat` has a glyph, `fix` has none
#[allow(dead_code)]
pub fn make_choices() -> PrefixChoices {
    PrefixChoices::new(vec!["feat: x".into(), "fix: y".into()]).unwrap()
}

#[allow(dead_code)]
pub fn make_table() -> EmojiTable {
    EmojiTable::from_json(r#"{"feat": ["✨"]}"#).unwrap()
}

/// Keys for typing `text` one character at a time
#[allow(dead_code)]
pub fn type_text(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}

/// Replays a fixed list of keys, then fails like a closed terminal
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

#[allow(dead_code)]
impl ScriptedKeys {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys: keys.into() }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            Error::Input(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no more keys",
            ))
        })
    }
}

#[derive(Default)]
pub struct RecordingScreen {
    pub frames: Vec<String>,
}

#[allow(dead_code)]
impl RecordingScreen {
    pub fn last(&self) -> &str {
        self.frames.last().map(String::as_str).unwrap_or_default()
    }
}

impl Screen for RecordingScreen {
    fn draw(&mut self, frame: &str) -> Result<()> {
        self.frames.push(console::strip_ansi_codes(frame).into_owned());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingCommitter {
    pub messages: Vec<String>,
    pub fail: bool,
}

#[allow(dead_code)]
impl RecordingCommitter {
    pub fn failing() -> Self {
        Self {
            messages: Vec::new(),
            fail: true,
        }
    }
}

impl Committer for RecordingCommitter {
    fn commit(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        if self.fail {
            return Err(Error::CommitFailed {
                status: "exit status: 1".into(),
            });
        }
        Ok(())
    }
}
