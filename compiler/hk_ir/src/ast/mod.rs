//! AST for top-level declarations.
//!
//! # Design Notes
//! - Every node has a small header (`location` + kind discriminator) and a
//!   kind-specific payload; later passes match on [`TopNodeKind`]
//!   exhaustively instead of dispatching through trait objects.
//! - Ownership is a strict tree: a [`TranslationUnit`] owns its top-level
//!   nodes, each node owns its payload. Dropping a node drops its subtree.
//! - No node type implements `Default`; a node cannot exist without the
//!   location of its first token.

mod library;

pub use library::{LibraryDeclarationNode, LibraryNode};

use crate::{Located, Location, PathId};

/// A top-level construct: common header plus kind-specific payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TopNode {
    /// Location of the construct's first token.
    pub location: Location,
    pub kind: TopNodeKind,
}

/// Closed set of top-level node kinds.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TopNodeKind {
    /// `library` declaration unit.
    Library(LibraryNode),
}

impl TopNode {
    pub fn new(location: Location, kind: TopNodeKind) -> Self {
        TopNode { location, kind }
    }

    /// An empty library node; its declaration is filled in by the parser.
    pub fn library(location: Location) -> Self {
        TopNode::new(location, TopNodeKind::Library(LibraryNode::new()))
    }

    /// Returns the library payload, if this is a library node.
    pub fn as_library(&self) -> Option<&LibraryNode> {
        match &self.kind {
            TopNodeKind::Library(lib) => Some(lib),
        }
    }

    /// Mutable access to the library payload, if this is a library node.
    pub fn as_library_mut(&mut self) -> Option<&mut LibraryNode> {
        match &mut self.kind {
            TopNodeKind::Library(lib) => Some(lib),
        }
    }
}

impl Located for TopNode {
    fn location(&self) -> Location {
        self.location
    }
}

/// Root of the AST for one source file.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TranslationUnit {
    pub path: PathId,
    items: Vec<TopNode>,
}

impl TranslationUnit {
    pub fn new(path: PathId) -> Self {
        TranslationUnit {
            path,
            items: Vec::new(),
        }
    }

    /// Append a top-level node, taking ownership of it.
    pub fn push(&mut self, node: TopNode) {
        self.items.push(node);
    }

    /// Top-level nodes in source order.
    pub fn items(&self) -> &[TopNode] {
        &self.items
    }

    /// All library nodes, in source order.
    pub fn libraries(&self) -> impl Iterator<Item = &LibraryNode> + '_ {
        self.items.iter().filter_map(TopNode::as_library)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
