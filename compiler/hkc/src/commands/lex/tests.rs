use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn lex_to_string(path: PathBuf, load: LoadOptions) -> Result<String, CommandError> {
    let mut out = Vec::new();
    lex_file(&LexArgs { path, load }, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// === Argument Parsing ===

#[test]
fn parse_path_only() {
    let parsed = parse_lex_args(&args(&["main.hk"])).unwrap();
    assert_eq!(parsed.path, PathBuf::from("main.hk"));
    assert_eq!(parsed.load, LoadOptions::default());
}

#[test]
fn parse_chunk_size() {
    let parsed = parse_lex_args(&args(&["--chunk-size=16", "main.hk"])).unwrap();
    assert_eq!(parsed.load.chunk_size(), 16);
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!(parse_lex_args(&[]), Err("missing file path".to_string()));
    assert_eq!(
        parse_lex_args(&args(&["--chunk-size=lots", "a.hk"])),
        Err("invalid chunk size 'lots'".to_string())
    );
    assert_eq!(
        parse_lex_args(&args(&["--chunk-size=0", "a.hk"])),
        Err("chunk size must be at least 1".to_string())
    );
    assert_eq!(
        parse_lex_args(&args(&["--verbose", "a.hk"])),
        Err("unknown option '--verbose'".to_string())
    );
    assert_eq!(
        parse_lex_args(&args(&["a.hk", "b.hk"])),
        Err("unexpected argument 'b.hk'".to_string())
    );
}

// === Lexing ===

#[test]
fn prints_one_token_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.hk");
    std::fs::write(&path, "library(0x2a);\n").unwrap();

    let output = lex_to_string(path, LoadOptions::default().with_chunk_size(5)).unwrap();
    assert_eq!(
        output,
        "1:1 Identifier \"library\"\n\
         1:8 LeftParen \"(\"\n\
         1:9 IntegerLiteral \"0x2a\"\n\
         1:13 RightParen \")\"\n\
         1:14 Semicolon \";\"\n\
         2:1 End \"\\0\"\n"
    );
}

#[test]
fn synthesized_terminator_is_printed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.hk");
    std::fs::write(&path, "42").unwrap();

    let output = lex_to_string(path, LoadOptions::default()).unwrap();
    assert_eq!(
        output,
        "1:1 IntegerLiteral \"42\"\n1:3 Semicolon \";\"\n1:3 End \"\\0\"\n"
    );
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = lex_to_string(dir.path().join("missing.hk"), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CommandError::Load(_)), "{err:?}");
}

#[test]
fn lex_error_stops_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.hk");
    std::fs::write(&path, "a $").unwrap();

    let mut out = Vec::new();
    let err = lex_file(
        &LexArgs {
            path,
            load: LoadOptions::default(),
        },
        &mut out,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "1:3: unexpected character '$'");
    assert_eq!(String::from_utf8(out).unwrap(), "1:1 Identifier \"a\"\n");
}
