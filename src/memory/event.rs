use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::MemoryNode;

/// Listener callback for [`MemoryNode`]s. Listeners are compared by pointer identity, so the same
/// [`Rc`] must be passed to remove one that was added.
pub type MemoryListener = Rc<dyn Fn(&MemoryEvent)>;

/// A synthetic event dispatched through [`crate::dom::Element::dispatch()`].
pub struct MemoryEvent {
    name: String,
    bubbles: bool,
    canceled: Cell<bool>,
    current_target: RefCell<Option<MemoryNode>>,
}

impl MemoryEvent {
    /// Create a bubbling event with the provided name.
    pub fn new<S>(name: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            name: name.as_ref().to_string(),
            bubbles: true,
            canceled: Cell::new(false),
            current_target: RefCell::new(None),
        }
    }

    /// Create an event that is only delivered to its target.
    pub fn non_bubbling<S>(name: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            bubbles: false,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn prevent_default(&self) {
        self.canceled.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.canceled.get()
    }

    /// The node whose listener is currently running. Only set while the event is being
    /// dispatched.
    pub fn current_target(&self) -> Option<MemoryNode> {
        self.current_target.borrow().clone()
    }

    pub(super) fn set_current_target(&self, target: Option<MemoryNode>) {
        *self.current_target.borrow_mut() = target;
    }
}
