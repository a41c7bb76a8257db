// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::Write;

use commitmoji::domain::{CommitType, EmojiTable};
use commitmoji::error::Error;
use commitmoji::services::emoji::load_table;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ─── Built-in table ──────────────────────────────────────────────────────────

#[test]
fn builtin_covers_every_builtin_tag() {
    let table = EmojiTable::builtin();
    for ct in CommitType::VARIANTS {
        let tag = ct.as_str();
        let glyphs = table.glyphs(tag).expect("tag missing from built-in table");
        assert!(!glyphs.is_empty(), "no glyphs for {tag:?}");
    }
}

#[test]
fn empty_table_has_no_glyphs() {
    let table = EmojiTable::empty();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(table.is_empty());
    assert_eq!(table.choose("feat", &mut rng), None);
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn parse_json_table() {
    let table = EmojiTable::from_json(r#"{"feat": ["✨", "🎉"], "fix": ["🐛"]}"#).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.glyphs("feat").unwrap(), ["✨", "🎉"]);
    assert!(table.glyphs("docs").is_none());
}

#[test]
fn parse_toml_table() {
    let table = EmojiTable::from_toml("feat = [\"✨\"]\nfix = [\"🐛\", \"🩹\"]\n").unwrap();
    assert_eq!(table.glyphs("fix").unwrap(), ["🐛", "🩹"]);
}

#[test]
fn reject_empty_glyph_list() {
    let err = EmojiTable::from_json(r#"{"feat": []}"#).unwrap_err();
    assert!(err.contains("feat"), "unexpected message: {err}");
}

#[test]
fn reject_blank_glyph() {
    assert!(EmojiTable::from_json(r#"{"feat": ["  "]}"#).is_err());
}

#[test]
fn reject_wrong_shapes() {
    for input in [r#"["✨"]"#, r#"{"feat": "✨"}"#, r#"{"feat": [1]}"#, "{", ""] {
        assert!(
            EmojiTable::from_json(input).is_err(),
            "expected error for {input:?}"
        );
    }
}

// ─── Selection ───────────────────────────────────────────────────────────────

#[test]
fn choose_only_returns_registered_glyphs() {
    let table = EmojiTable::from_json(r#"{"feat": ["✨", "🎉", "🚀"]}"#).unwrap();
    let registered = table.glyphs("feat").unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let glyph = table.choose("feat", &mut rng).unwrap();
        assert!(registered.iter().any(|g| g == glyph));
    }
    assert_eq!(table.choose("fix", &mut rng), None);
}

#[test]
fn choose_reaches_every_glyph() {
    let table = EmojiTable::from_json(r#"{"feat": ["✨", "🎉", "🚀"]}"#).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..500 {
        seen.insert(table.choose("feat", &mut rng).unwrap().to_string());
    }
    assert_eq!(seen.len(), 3);
}

// ─── Loading from disk ───────────────────────────────────────────────────────

#[test]
fn load_without_path_uses_builtin() {
    assert_eq!(load_table(None).unwrap(), EmojiTable::builtin());
}

#[test]
fn load_json_file() {
    let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
    write!(file, r#"{{"feat": ["✨"]}}"#).unwrap();
    let table = load_table(Some(file.path())).unwrap();
    assert_eq!(table.glyphs("feat").unwrap(), ["✨"]);
}

#[test]
fn load_toml_file_by_extension() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "docs = [\"📝\"]").unwrap();
    let table = load_table(Some(file.path())).unwrap();
    assert_eq!(table.glyphs("docs").unwrap(), ["📝"]);
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_table(Some(path.as_path())).unwrap_err();
    assert!(
        matches!(err, Error::EmojiFileRead { .. }),
        "expected EmojiFileRead, got: {err:?}"
    );
}

#[test]
fn malformed_file_is_format_error() {
    let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
    write!(file, "not json").unwrap();
    let err = load_table(Some(file.path())).unwrap_err();
    assert!(
        matches!(err, Error::EmojiFileFormat { .. }),
        "expected EmojiFileFormat, got: {err:?}"
    );
}

proptest! {
    #[test]
    fn json_parser_never_panics(input in any::<String>()) {
        let _ = EmojiTable::from_json(&input);
    }
}
