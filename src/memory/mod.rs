//! A document tree held entirely in memory. Implements the same [`crate::dom`] capabilities as
//! the browser backend, so every batch operation can run (and be tested) without a host page.
//!
//! Inner HTML is stored as an opaque string; it is never parsed into child nodes.

mod event;
mod node;

pub use event::*;
pub use node::*;

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// An observable change made to a [`MemoryNode`]. Only changes that actually alter the tree are
/// recorded: adding a class that is already present does not produce an entry.
///
/// Writing the `className` property replaces the whole class set and is logged as a single
/// [`Mutation::PropertySet`], not as per-class entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ClassAdded { node: usize, class: String },
    ClassRemoved { node: usize, class: String },
    PropertySet { node: usize, name: String },
    HtmlSet { node: usize },
    ChildAppended { parent: usize, child: usize },
    ChildPrepended { parent: usize, child: usize },
    ListenerAdded { node: usize, event: String },
    ListenerRemoved { node: usize, event: String },
    Dispatched { node: usize, event: String },
}

/// Shared log of [`Mutation`]s, appended to by every node of a document.
pub(crate) type MutationLog = Rc<RefCell<Vec<Mutation>>>;

/// Factory for [`MemoryNode`]s. Nodes created by the same document share its mutation log and
/// have unique ids.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    log: MutationLog,
    next_id: Rc<Cell<usize>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element with the provided tag name.
    pub fn element<S>(&self, tag: S) -> MemoryNode
    where
        S: AsRef<str>,
    {
        MemoryNode::new(
            self.allocate_id(),
            NodeKind::Element(tag.as_ref().to_string()),
            &self.log,
        )
    }

    /// Create a detached text node with the provided content.
    pub fn text<S>(&self, content: S) -> MemoryNode
    where
        S: AsRef<str>,
    {
        MemoryNode::new(
            self.allocate_id(),
            NodeKind::Text(content.as_ref().to_string()),
            &self.log,
        )
    }

    /// Every mutation recorded so far, oldest first.
    pub fn mutations(&self) -> Vec<Mutation> {
        self.log.borrow().clone()
    }

    pub fn clear_mutations(&self) {
        self.log.borrow_mut().clear();
    }

    fn allocate_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}
