//! Library declaration nodes.

use crate::{Located, Location};

/// A `library` declaration unit.
///
/// Owns at most one [`LibraryDeclarationNode`]. The declaration is `None`
/// between the moment the parser recognizes the construct and the moment it
/// finishes parsing the body.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LibraryNode {
    pub declaration: Option<Box<LibraryDeclarationNode>>,
}

impl LibraryNode {
    pub(crate) fn new() -> Self {
        LibraryNode { declaration: None }
    }

    /// Install `declaration`, returning the one it replaces.
    pub fn set_declaration(
        &mut self,
        declaration: LibraryDeclarationNode,
    ) -> Option<Box<LibraryDeclarationNode>> {
        self.declaration.replace(Box::new(declaration))
    }

    /// Remove and return the declaration, leaving the node unpopulated.
    pub fn take_declaration(&mut self) -> Option<Box<LibraryDeclarationNode>> {
        self.declaration.take()
    }

    pub fn declaration(&self) -> Option<&LibraryDeclarationNode> {
        self.declaration.as_deref()
    }

    pub fn is_populated(&self) -> bool {
        self.declaration.is_some()
    }
}

/// Body of a library declaration.
///
/// Opaque to this layer beyond its name; the parser decides what goes in it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LibraryDeclarationNode {
    pub location: Location,
    pub name: String,
}

impl LibraryDeclarationNode {
    pub fn new(location: Location, name: impl Into<String>) -> Self {
        LibraryDeclarationNode {
            location,
            name: name.into(),
        }
    }
}

impl Located for LibraryDeclarationNode {
    fn location(&self) -> Location {
        self.location
    }
}
