//! Disk file to token stream, end to end.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use std::sync::Arc;

use hk_io::{load_source, FileReader, LoadOptions, SourceFile};
use hk_ir::{PathTable, TokenKind};
use hk_lexer::tokenize_buffer;
use pretty_assertions::assert_eq;

fn disk_source(dir: &tempfile::TempDir, name: &str, contents: &str) -> (Arc<PathTable>, SourceFile) {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    let paths = Arc::new(PathTable::new());
    let id = paths.intern(&path);
    (Arc::clone(&paths), SourceFile::Disk(FileReader::new(paths, id)))
}

#[test]
fn tokens_from_disk_carry_file_locations() {
    let dir = tempfile::tempdir().unwrap();
    let (paths, file) = disk_source(&dir, "main.hk", "library core;\n0x10\n");

    let buffer = load_source(&file, &LoadOptions::default().with_chunk_size(4)).unwrap();
    file.close();
    let tokens = tokenize_buffer(&buffer).unwrap();

    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.text, t.location.line, t.location.column))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Identifier, "library", 1, 1),
            (TokenKind::Identifier, "core", 1, 9),
            (TokenKind::Semicolon, ";", 1, 13),
            (TokenKind::IntegerLiteral, "0x10", 2, 1),
            (TokenKind::Semicolon, ";", 3, 1),
            (TokenKind::End, "\0", 3, 1),
        ]
    );

    let resolved = paths.resolve(tokens[0].location.path).unwrap();
    assert_eq!(&*resolved, dir.path().join("main.hk").as_path());
}

#[test]
fn empty_file_yields_only_end() {
    let dir = tempfile::tempdir().unwrap();
    let (_, file) = disk_source(&dir, "empty.hk", "");

    let buffer = load_source(&file, &LoadOptions::default()).unwrap();
    let tokens = tokenize_buffer(&buffer).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::End);
}

#[test]
fn lex_error_after_loading() {
    let dir = tempfile::tempdir().unwrap();
    let (_, file) = disk_source(&dir, "bad.hk", "library 0b102;");

    let buffer = load_source(&file, &LoadOptions::default()).unwrap();
    let err = tokenize_buffer(&buffer).unwrap_err();
    assert_eq!(err.location.offset, 8);
    assert_eq!(err.to_string(), "1:9: invalid integer literal `0b102`");
}

#[test]
fn shared_reader_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let text = "abcdefghijklmnopqrstuvwxyz".repeat(40);
    let (_, file) = disk_source(&dir, "shared.hk", &text);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let buffer = load_source(&file, &LoadOptions::default().with_chunk_size(13)).unwrap();
                assert_eq!(buffer.as_str(), text);
            });
        }
    });
}
