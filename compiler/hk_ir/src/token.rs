//! Token types for the Hiko lexer.
//!
//! A [`Token`] borrows its text from the source buffer it was scanned from,
//! so it is `Copy` and costs nothing to hand to a delegate. A delegate that
//! wants to keep tokens past the buffer's lifetime copies what it needs.

use std::fmt;

use crate::Location;

/// A token with its source text and location.
///
/// `text` is the exact slice of the source the token was scanned from, with
/// two exceptions that have no source text of their own: the synthesized
/// statement terminator (`";"`) and the end-of-stream sentinel (`"\0"`).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub location: Location,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, location: Location) -> Self {
        Token {
            kind,
            text,
            location,
        }
    }

    /// Returns `true` for the end-of-stream sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.location)
    }
}

/// Token kinds for Hiko.
///
/// Only the literal, identifier, punctuation and sentinel kinds exist so far.
/// The set is `non_exhaustive` because operators and keywords are added as
/// the grammar grows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum TokenKind {
    /// Integer literal in decimal, hex (`0x`/`0X`) or binary (`0b`/`0B`).
    /// Text is kept verbatim; the value is parsed later.
    IntegerLiteral,
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,

    /// `;` (written in source or synthesized at end of input)
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `=`
    Equal,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,

    /// End-of-stream sentinel. Always the last token, emitted exactly once.
    End,
}

impl TokenKind {
    /// Map a single punctuation character to its kind.
    pub fn from_punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Equal,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether a statement may end with a token of this kind.
    ///
    /// Drives terminator synthesis at end of input: literals, identifiers and
    /// closing punctuation can end a statement, everything else cannot.
    pub fn ends_statement(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::Identifier
                | TokenKind::RightParen
                | TokenKind::RightBracket
                | TokenKind::RightBrace
        )
    }

    /// Get a human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Colon => "`:`",
            TokenKind::Equal => "`=`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::End => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
