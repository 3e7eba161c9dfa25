//! Single-pass tokenizer state machine.
//!
//! The tokenizer pulls characters from a [`Cursor`] and produces one
//! [`Token`] per call to [`Iterator::next`]. It never backtracks and never
//! buffers more than the token it is building.
//!
//! # Termination Protocol
//!
//! ```text
//! Scanning --(input exhausted)--> Ending --(End emitted)--> Done
//!     |                              |
//!     +--(lex error)--> Done         +--(first call only) synthesized `;`
//! ```
//!
//! On the transition into `Ending`, a `;` is synthesized if the last emitted
//! token can end a statement. `Ending` then yields the `End` sentinel exactly
//! once, and `Done` yields nothing.

use hk_ir::{Location, Token, TokenKind};
use hk_lexer_core::Cursor;
use tracing::{debug, trace};

use crate::LexError;

/// Text of the synthesized statement terminator.
const TERMINATOR_TEXT: &str = ";";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Producing tokens from source text.
    Scanning,
    /// Input exhausted; the next token is the `End` sentinel.
    Ending,
    /// Sentinel emitted or scan aborted.
    Done,
}

/// Base of an integer literal, chosen by its prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Radix {
    Binary,
    Decimal,
    Hex,
}

impl Radix {
    fn is_digit(self, c: char) -> bool {
        match self {
            Radix::Binary => matches!(c, '0' | '1'),
            Radix::Decimal => c.is_ascii_digit(),
            Radix::Hex => c.is_ascii_hexdigit(),
        }
    }
}

/// Pull-style tokenizer over one cursor.
///
/// Yields `Ok(token)` values ending with exactly one `End` token, then
/// `None`. After an `Err` it yields `None`.
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    state: State,
    /// Kind of the most recently produced token.
    last_kind: Option<TokenKind>,
}

impl<'src> Tokenizer<'src> {
    pub fn new(cursor: Cursor<'src>) -> Self {
        Self {
            cursor,
            state: State::Scanning,
            last_kind: None,
        }
    }

    /// Returns `true` once the sentinel has been produced or a scan error
    /// has ended the stream.
    pub fn is_finished(&self) -> bool {
        self.state == State::Done
    }

    /// Scan the next token.
    ///
    /// Returns `None` once the stream has ended, either after the `End`
    /// token or after an error.
    pub fn next_token(&mut self) -> Option<Result<Token<'src>, LexError>> {
        if self.state == State::Done {
            return None;
        }

        let result = self.scan();
        match &result {
            Ok(token) => {
                trace!(kind = ?token.kind, text = token.text, location = %token.location, "token");
                if token.is_end() {
                    self.state = State::Done;
                }
                self.last_kind = Some(token.kind);
            }
            Err(err) => {
                debug!(%err, "tokenizer stopped on lexical error");
                self.state = State::Done;
            }
        }
        Some(result)
    }

    fn scan(&mut self) -> Result<Token<'src>, LexError> {
        if self.state == State::Scanning {
            self.cursor.eat_whitespace();
            if !self.cursor.is_eof() {
                return self.scan_token();
            }

            self.state = State::Ending;
            if self.last_kind.is_some_and(TokenKind::ends_statement) {
                let location = self.cursor.position();
                debug!(%location, "synthesizing statement terminator at end of input");
                return Ok(Token::new(TokenKind::Semicolon, TERMINATOR_TEXT, location));
            }
        }

        Ok(Token::new(
            TokenKind::End,
            self.cursor.sentinel_text(),
            self.cursor.position(),
        ))
    }

    fn scan_token(&mut self) -> Result<Token<'src>, LexError> {
        let start = self.cursor.offset();
        let location = self.cursor.position();
        let c = self.cursor.peek();
        match c {
            '0'..='9' => self.number(start, location),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier(start, location)),
            _ => match TokenKind::from_punctuation(c) {
                Some(kind) => {
                    self.cursor.advance();
                    Ok(Token::new(kind, self.cursor.slice_from(start), location))
                }
                None => Err(LexError::unexpected_character(c, location)),
            },
        }
    }

    // === Identifiers ===

    fn identifier(&mut self, start: u32, location: Location) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        Token::new(TokenKind::Identifier, self.cursor.slice_from(start), location)
    }

    // === Integer Literals ===

    fn number(&mut self, start: u32, location: Location) -> Result<Token<'src>, LexError> {
        let radix = match (self.cursor.peek(), self.cursor.peek_next()) {
            ('0', 'x' | 'X') => Radix::Hex,
            ('0', 'b' | 'B') => Radix::Binary,
            _ => Radix::Decimal,
        };

        if radix != Radix::Decimal {
            // Prefix is kept in the token text exactly as written.
            self.cursor.advance();
            self.cursor.advance();
        }

        let digits_start = self.cursor.offset();
        self.cursor.eat_while(|c| radix.is_digit(c));
        let no_digits = self.cursor.offset() == digits_start;

        if no_digits || is_ident_continue(self.cursor.peek()) {
            // Take the rest of the word so the error shows the whole literal.
            self.cursor.eat_while(is_ident_continue);
            return Err(LexError::invalid_literal(
                self.cursor.slice_from(start),
                location,
            ));
        }

        Ok(Token::new(
            TokenKind::IntegerLiteral,
            self.cursor.slice_from(start),
            location,
        ))
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Returns `true` if `c` can continue an identifier.
#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
