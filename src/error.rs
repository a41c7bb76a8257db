// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Cannot read emoji file {}", path.display())]
    #[diagnostic(
        code(commitmoji::emoji::unreadable),
        help("Check EMOJI_FILE / --emoji-file, or unset it to use the built-in table")
    )]
    EmojiFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed emoji file {}: {message}", path.display())]
    #[diagnostic(
        code(commitmoji::emoji::malformed),
        help("Expected an object mapping each tag to a non-empty list of emoji")
    )]
    EmojiFileFormat { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commitmoji::config::error))]
    Config(String),

    #[error("Failed to read keyboard input")]
    #[diagnostic(
        code(commitmoji::input::error),
        help("Run commitmoji from an interactive terminal")
    )]
    Input(#[source] std::io::Error),

    #[error("Failed to commit: git exited with {status}")]
    #[diagnostic(
        code(commitmoji::git::commit_failed),
        help("See git's output above")
    )]
    CommitFailed { status: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
