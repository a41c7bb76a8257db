// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitmoji::domain::EmojiTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(table) = EmojiTable::from_json(s) {
            for (_, glyphs) in table.iter() {
                assert!(!glyphs.is_empty());
            }
        }
        let _ = EmojiTable::from_toml(s);
    }
});
