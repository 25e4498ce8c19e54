use super::Value;
use crate::DomError;

/// The capabilities the batch helpers need from a single node in a document tree. Handles are
/// expected to be cheap to clone, and clones must refer to the same underlying node.
///
/// Implementations forward straight to the host; they must not catch, retry or pre-validate. A
/// node lacking a capability (eg. a text node asked for its classes) reports
/// [`DomError::UnsupportedOperation`].
pub trait Element: Clone {
    /// Callback type accepted by [`Self::add_listener()`].
    type Listener;

    /// Event type accepted by [`Self::dispatch()`].
    type Event;

    /// Add a token to the class set. Adding a present token is a no-op.
    fn add_class(&self, class: &str) -> Result<(), DomError>;

    /// Remove a token from the class set. Removing an absent token is a no-op.
    fn remove_class(&self, class: &str) -> Result<(), DomError>;

    /// Flip a token in the class set, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> Result<bool, DomError>;

    fn has_class(&self, class: &str) -> Result<bool, DomError>;

    /// Assign a property on the node, equivalent to `node[name] = value` in JS.
    fn set_property(&self, name: &str, value: &Value) -> Result<(), DomError>;

    fn inner_html(&self) -> Result<String, DomError>;

    fn set_inner_html(&self, html: &str) -> Result<(), DomError>;

    /// Append `child` as the last child, moving it from any previous parent.
    fn append_child(&self, child: &Self) -> Result<(), DomError>;

    /// Insert `child` before the current first child, or append it if there are no children.
    fn prepend_child(&self, child: &Self) -> Result<(), DomError>;

    fn add_listener(
        &self,
        event: &str,
        listener: &Self::Listener,
        capture: bool,
    ) -> Result<(), DomError>;

    fn remove_listener(
        &self,
        event: &str,
        listener: &Self::Listener,
        capture: bool,
    ) -> Result<(), DomError>;

    /// Synchronously dispatch `event` at this node. Returns `false` if a listener cancelled it.
    fn dispatch(&self, event: &Self::Event) -> Result<bool, DomError>;
}
