// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

use tracing::debug;

use crate::domain::EmojiTable;
use crate::error::{Error, Result};

/// Load the emoji table from `path`, or fall back to the built-in table when
/// no path is configured. A configured path that cannot be read or parsed is
/// an error; there is no silent fallback.
pub fn load_table(path: Option<&Path>) -> Result<EmojiTable> {
    let Some(path) = path else {
        debug!("no emoji file configured, using built-in table");
        return Ok(EmojiTable::builtin());
    };

    let content = std::fs::read_to_string(path).map_err(|source| Error::EmojiFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        EmojiTable::from_toml(&content)
    } else {
        EmojiTable::from_json(&content)
    };

    let table = parsed.map_err(|message| Error::EmojiFileFormat {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(path = %path.display(), tags = table.len(), "emoji table loaded");
    Ok(table)
}
