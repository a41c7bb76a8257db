// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use console::{Key, Term, measure_text_width};

use crate::error::{Error, Result};

/// Source of key presses for the wizard.
pub trait KeySource {
    fn next_key(&mut self) -> Result<Key>;
}

/// Where rendered frames go. Each call replaces the previous frame.
pub trait Screen {
    fn draw(&mut self, frame: &str) -> Result<()>;

    /// Leave the current frame in place; the next draw starts below it.
    fn detach(&mut self) {}
}

pub struct TermKeys {
    term: Term,
}

impl TermKeys {
    pub fn new(term: Term) -> Self {
        Self { term }
    }
}

impl KeySource for TermKeys {
    fn next_key(&mut self) -> Result<Key> {
        // raw read so ctrl-c arrives as Key::CtrlC instead of raising SIGINT
        self.term.read_key_raw().map_err(Error::Input)
    }
}

/// Redraws frames in place on a terminal.
pub struct TermScreen {
    term: Term,
    rows_above: usize,
}

impl TermScreen {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            rows_above: 0,
        }
    }
}

impl Screen for TermScreen {
    fn draw(&mut self, frame: &str) -> Result<()> {
        self.term.clear_line()?;
        if self.rows_above > 0 {
            self.term.clear_last_lines(self.rows_above)?;
        }
        self.term.write_str(frame)?;
        self.term.flush()?;

        let (_, cols) = self.term.size();
        self.rows_above = rows_above_cursor(frame, usize::from(cols));
        Ok(())
    }

    fn detach(&mut self) {
        self.rows_above = 0;
    }
}

/// Rows between the top of `frame` and the row the cursor ends on, counting
/// soft wraps at `cols`.
pub fn rows_above_cursor(frame: &str, cols: usize) -> usize {
    let cols = cols.max(1);
    let wrapped = |line: &str| measure_text_width(line).div_ceil(cols).max(1);

    let mut lines: Vec<&str> = frame.split('\n').collect();
    let tail = lines.pop().unwrap_or_default();

    let complete: usize = lines.iter().map(|l| wrapped(l)).sum();
    complete + wrapped(tail) - 1
}
