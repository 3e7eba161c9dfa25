//! Focused capability traits.

use crate::{Location, Token};

/// Trait for values that carry a source location.
///
/// Every AST node and every token implements it, so diagnostics can point at
/// any of them without knowing the concrete type.
pub trait Located {
    /// Get the location of the first character.
    fn location(&self) -> Location;
}

impl Located for Token<'_> {
    fn location(&self) -> Location {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathId, TokenKind};

    #[test]
    fn token_location_through_trait() {
        let at = Location::new(PathId::MEMORY, 4, 2, 17);
        let token = Token::new(TokenKind::Identifier, "lib", at);
        assert_eq!(Located::location(&token), at);
    }
}
