// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

//! The commit prompt: pick a prefix, type a message, commit.
//!
//! [`Wizard`] is a pure state machine over [`console::Key`] presses and
//! [`Wizard::render`] is a pure function of its state. [`run_session`] wires
//! it to a key source, a screen and a committer.

use console::{Key, style};
use rand::Rng;
use tracing::debug;

use crate::domain::{EmojiTable, PrefixChoices};
use crate::error::Result;
use crate::services::git::Committer;
use crate::services::terminal::{KeySource, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    ChoosingPrefix { cursor: usize },
    EnteringMessage { prefix: String, buffer: String },
    Done { message: String },
}

/// What the caller must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
    Commit(String),
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Committed(String),
}

pub struct Wizard<'a, R> {
    choices: &'a PrefixChoices,
    emojis: &'a EmojiTable,
    rng: R,
    state: SessionState,
    quitting: bool,
    char_limit: Option<usize>,
}

impl<'a, R: Rng> Wizard<'a, R> {
    pub fn new(choices: &'a PrefixChoices, emojis: &'a EmojiTable, rng: R) -> Self {
        Self {
            choices,
            emojis,
            rng,
            state: SessionState::ChoosingPrefix { cursor: 0 },
            quitting: false,
            char_limit: None,
        }
    }

    /// Cap the message buffer at `limit` characters; further typing is ignored.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn handle_key(&mut self, key: &Key) -> Transition {
        if self.quitting {
            return Transition::Quit;
        }
        match &mut self.state {
            SessionState::ChoosingPrefix { cursor } => match key {
                Key::CtrlC | Key::Escape | Key::Char('q') => self.quit(),
                Key::ArrowUp | Key::Char('k') => {
                    *cursor = cursor.saturating_sub(1);
                    Transition::Continue
                }
                Key::ArrowDown | Key::Char('j') => {
                    *cursor = (*cursor + 1).min(self.choices.len() - 1);
                    Transition::Continue
                }
                Key::Enter => {
                    let cursor = *cursor;
                    self.select(cursor);
                    Transition::Continue
                }
                _ => Transition::Continue,
            },
            SessionState::EnteringMessage { prefix, buffer } => match key {
                Key::CtrlC | Key::Escape => self.quit(),
                Key::Enter => Transition::Commit(format!("{prefix}{buffer}")),
                Key::Backspace => {
                    buffer.pop();
                    Transition::Continue
                }
                Key::Char(c) if !c.is_control() => {
                    if self
                        .char_limit
                        .is_none_or(|limit| buffer.chars().count() < limit)
                    {
                        buffer.push(*c);
                    }
                    Transition::Continue
                }
                _ => Transition::Continue,
            },
            SessionState::Done { .. } => Transition::Continue,
        }
    }

    /// Record a successful commit.
    pub fn finish(&mut self, message: String) {
        self.state = SessionState::Done { message };
    }

    fn quit(&mut self) -> Transition {
        self.quitting = true;
        Transition::Quit
    }

    fn select(&mut self, cursor: usize) {
        let Some(tag) = self.choices.tag(cursor) else {
            return;
        };
        let prefix = match self.emojis.choose(tag, &mut self.rng) {
            Some(glyph) => format!("{tag}: {glyph} "),
            None => format!("{tag}: "),
        };
        debug!(%prefix, "prefix selected");
        self.state = SessionState::EnteringMessage {
            prefix,
            buffer: String::new(),
        };
    }
}

impl<R> Wizard<'_, R> {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Live preview of the commit message while typing.
    pub fn preview(&self) -> Option<String> {
        match &self.state {
            SessionState::EnteringMessage { prefix, buffer } => Some(format!("{prefix}{buffer}")),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        if self.quitting {
            return "Exiting...\n".to_string();
        }

        match &self.state {
            SessionState::ChoosingPrefix { cursor } => {
                let mut out = String::from("Choose a commit message prefix:\n\n");
                for (i, label) in self.choices.labels().iter().enumerate() {
                    let number = i + 1;
                    if i == *cursor {
                        let row = format!("{number}. {label}");
                        out.push_str(&format!("> {}\n", style(row).magenta().bold()));
                    } else {
                        out.push_str(&format!("  {number}. {label}\n"));
                    }
                }
                out.push_str(&format!(
                    "\n{}\n",
                    style("↑/↓ or k/j to move, enter to select, q to quit").dim()
                ));
                out
            }
            SessionState::EnteringMessage { prefix, buffer } => format!(
                "Enter your commit message (starting with {prefix}):\n\n{prefix}{buffer}"
            ),
            SessionState::Done { .. } => "Commit complete!\n".to_string(),
        }
    }
}

/// Drive one session to completion. Quitting never reaches the committer; a
/// committer error ends the session without entering `Done`.
pub fn run_session<R, K, S, C>(
    wizard: &mut Wizard<'_, R>,
    keys: &mut K,
    screen: &mut S,
    committer: &mut C,
) -> Result<Outcome>
where
    R: Rng,
    K: KeySource,
    S: Screen,
    C: Committer,
{
    screen.draw(&wizard.render())?;

    loop {
        let key = keys.next_key()?;
        match wizard.handle_key(&key) {
            Transition::Continue => screen.draw(&wizard.render())?,
            Transition::Quit => {
                screen.draw(&wizard.render())?;
                return Ok(Outcome::Quit);
            }
            Transition::Commit(message) => {
                // keep the final preview on screen above git's own output
                screen.draw(&format!("{}\n", wizard.render()))?;
                screen.detach();
                committer.commit(&message)?;
                wizard.finish(message.clone());
                screen.draw(&wizard.render())?;
                return Ok(Outcome::Committed(message));
            }
        }
    }
}
