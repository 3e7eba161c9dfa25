//! Hiko IR - shared front-end types.
//!
//! This crate contains the data structures that flow between the front-end
//! stages of the Hiko compiler:
//! - `PathId` and `PathTable` for cheap file identities
//! - `Location` for line/column/offset positions
//! - `Token` and `TokenKind` for lexer output
//! - AST nodes for top-level declarations
//!
//! # Design Philosophy
//!
//! - **Intern paths**: heavy `PathBuf`s live in the table, everything else
//!   carries a `PathId(u32)`
//! - **Closed node sets**: node kinds are enums matched exhaustively, not
//!   trait objects
//! - **Strict ownership**: AST children are owned through `Box`/`Vec`, never
//!   shared

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod location;
mod path;
mod token;
mod traits;
pub mod visitor;

pub use ast::{
    LibraryDeclarationNode, LibraryNode, TopNode, TopNodeKind, TranslationUnit,
};
pub use location::Location;
pub use path::{PathId, PathTable, PathTableError};
pub use token::{Token, TokenKind};
pub use traits::Located;
