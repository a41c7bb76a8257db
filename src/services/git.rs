// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Performs the actual commit once the wizard has a finished message.
pub trait Committer {
    fn commit(&mut self, message: &str) -> Result<()>;
}

/// Runs `git commit -m <message>`, with git's stdout/stderr passed straight
/// through to ours.
pub struct GitCommitter {
    work_dir: PathBuf,
}

impl GitCommitter {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl Committer for GitCommitter {
    fn commit(&mut self, message: &str) -> Result<()> {
        debug!(work_dir = %self.work_dir.display(), "invoking git commit");

        let status = Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(&self.work_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::CommitFailed {
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Prints the message to stdout instead of committing (`--dry-run`).
pub struct PrintCommitter;

impl Committer for PrintCommitter {
    fn commit(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }
}
