use hk_ir::PathId;

use super::*;

#[test]
fn invalid_literal_message() {
    let err = LexError::invalid_literal("0x", Location::new(PathId::MEMORY, 2, 7, 12));
    assert_eq!(err.to_string(), "2:7: invalid integer literal `0x`");
}

#[test]
fn unexpected_character_message() {
    let err = LexError::unexpected_character('#', Location::start_of(PathId::MEMORY));
    assert_eq!(err.to_string(), "1:1: unexpected character '#'");
}

#[test]
fn nul_is_escaped_in_message() {
    let err = LexError::unexpected_character('\0', Location::start_of(PathId::MEMORY));
    assert_eq!(err.to_string(), "1:1: unexpected character '\\0'");
}
