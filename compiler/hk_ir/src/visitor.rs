//! AST Visitor Pattern
//!
//! Read-only traversal of a [`TranslationUnit`]. Default implementations call
//! the `walk_*` functions, which descend into children. Override `visit_*`
//! methods to add behavior at specific nodes and call the matching `walk_*`
//! to keep descending.
//!
//! # Example
//!
//! ```text
//! struct LibraryNames<'ast> {
//!     names: Vec<&'ast str>,
//! }
//!
//! impl<'ast> Visitor<'ast> for LibraryNames<'ast> {
//!     fn visit_library_declaration(&mut self, decl: &'ast LibraryDeclarationNode) {
//!         self.names.push(&decl.name);
//!     }
//! }
//! ```

use crate::ast::{LibraryDeclarationNode, LibraryNode, TopNode, TopNodeKind, TranslationUnit};

/// AST Visitor trait.
///
/// The visitor can mutate its own state during traversal; the AST itself
/// stays immutable.
pub trait Visitor<'ast> {
    fn visit_translation_unit(&mut self, unit: &'ast TranslationUnit) {
        walk_translation_unit(self, unit);
    }

    fn visit_top_node(&mut self, node: &'ast TopNode) {
        walk_top_node(self, node);
    }

    fn visit_library(&mut self, library: &'ast LibraryNode) {
        walk_library(self, library);
    }

    fn visit_library_declaration(&mut self, _declaration: &'ast LibraryDeclarationNode) {}
}

pub fn walk_translation_unit<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    unit: &'ast TranslationUnit,
) {
    for node in unit.items() {
        visitor.visit_top_node(node);
    }
}

pub fn walk_top_node<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast TopNode) {
    match &node.kind {
        TopNodeKind::Library(library) => visitor.visit_library(library),
    }
}

pub fn walk_library<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, library: &'ast LibraryNode) {
    if let Some(declaration) = library.declaration() {
        visitor.visit_library_declaration(declaration);
    }
}
