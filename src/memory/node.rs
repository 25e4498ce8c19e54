use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::{Rc, Weak},
};

use super::{MemoryEvent, MemoryListener, Mutation, MutationLog};
use crate::{
    class_list::validate_token,
    dom::{Collection, Element, Value},
    util::HashMapList,
    DomError,
};

/// What a [`MemoryNode`] is. Only elements have classes, inner HTML and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An element, containing its tag name.
    Element(String),

    /// A text node, containing its content.
    Text(String),
}

struct NodeData {
    id: usize,
    kind: NodeKind,

    /// Class tokens, in the order they were added.
    classes: RefCell<Vec<String>>,
    properties: RefCell<HashMap<String, Value>>,
    inner_html: RefCell<String>,

    children: RefCell<Vec<MemoryNode>>,
    parent: RefCell<Weak<NodeData>>,

    /// Listeners by event name, along with their capture flag.
    listeners: RefCell<HashMapList<String, (MemoryListener, bool)>>,

    log: MutationLog,
}

/// Handle to a node owned by a [`super::MemoryDocument`]. Clones refer to the same node, and
/// equality is node identity.
#[derive(Clone)]
pub struct MemoryNode(Rc<NodeData>);

impl MemoryNode {
    pub(super) fn new(id: usize, kind: NodeKind, log: &MutationLog) -> Self {
        Self(Rc::new(NodeData {
            id,
            kind,
            classes: RefCell::new(Vec::new()),
            properties: RefCell::new(HashMap::new()),
            inner_html: RefCell::new(String::new()),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            listeners: RefCell::new(HashMapList::new()),
            log: Rc::clone(log),
        }))
    }

    /// Identifier unique within the owning document. Used in [`Mutation`] entries.
    pub fn id(&self) -> usize {
        self.0.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.0.kind
    }

    pub fn is_element(&self) -> bool {
        matches!(self.0.kind, NodeKind::Element(_))
    }

    /// Snapshot of the class tokens.
    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    pub fn property(&self, name: &str) -> Option<Value> {
        self.0.properties.borrow().get(name).cloned()
    }

    /// Snapshot of the children.
    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.children.borrow().clone()
    }

    /// Live view of the children, reflecting any later changes.
    pub fn child_nodes(&self) -> ChildNodes {
        ChildNodes(self.clone())
    }

    pub fn parent(&self) -> Option<MemoryNode> {
        self.0.parent.borrow().upgrade().map(MemoryNode)
    }

    /// Remove this node from its parent, if it has one.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.0.children.borrow_mut().retain(|child| child != self);
            *self.0.parent.borrow_mut() = Weak::new();
        }
    }

    fn record(&self, mutation: Mutation) {
        self.0.log.borrow_mut().push(mutation);
    }

    /// Fails for anything other than an element.
    fn require_element(&self, operation: &'static str) -> Result<(), DomError> {
        if self.is_element() {
            Ok(())
        } else {
            Err(DomError::unsupported(operation))
        }
    }

    /// Whether `self` is `other` or one of its ancestors.
    fn is_inclusive_ancestor_of(&self, other: &MemoryNode) -> bool {
        let mut current = Some(other.clone());

        while let Some(node) = current {
            if &node == self {
                return true;
            }
            current = node.parent();
        }

        false
    }

    /// Shared checks and detaching for both insertion methods.
    fn adopt(&self, child: &MemoryNode, operation: &'static str) -> Result<(), DomError> {
        self.require_element(operation)?;

        if child.is_inclusive_ancestor_of(self) {
            return Err(DomError::Host(
                "HierarchyRequestError: the new child is an ancestor of the parent".into(),
            ));
        }

        child.detach();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);

        Ok(())
    }
}

impl MemoryNode {
    /// Call this node's listeners for `event` whose capture flag passes `phase`, in registration
    /// order. Listeners run with no borrows held, so they are free to mutate the tree.
    fn invoke_listeners<P>(&self, event: &MemoryEvent, phase: P)
    where
        P: Fn(bool) -> bool,
    {
        let listeners = self
            .0
            .listeners
            .borrow()
            .get(event.name())
            .iter()
            .filter(|(_, capture)| phase(*capture))
            .map(|(listener, _)| Rc::clone(listener))
            .collect::<Vec<_>>();

        event.set_current_target(Some(self.clone()));
        listeners.iter().for_each(|listener| listener(event));
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryNode")
            .field("id", &self.0.id)
            .field("kind", &self.0.kind)
            .field("classes", &self.0.classes.borrow())
            .finish()
    }
}

impl Element for MemoryNode {
    type Listener = MemoryListener;
    type Event = MemoryEvent;

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.require_element("classList.add")?;
        validate_token(class)?;

        let mut classes = self.0.classes.borrow_mut();
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
            drop(classes);

            self.record(Mutation::ClassAdded {
                node: self.id(),
                class: class.to_string(),
            });
        }

        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        self.require_element("classList.remove")?;
        validate_token(class)?;

        let mut classes = self.0.classes.borrow_mut();
        let before = classes.len();
        classes.retain(|existing| existing != class);
        let removed = classes.len() != before;
        drop(classes);

        if removed {
            self.record(Mutation::ClassRemoved {
                node: self.id(),
                class: class.to_string(),
            });
        }

        Ok(())
    }

    fn toggle_class(&self, class: &str) -> Result<bool, DomError> {
        self.require_element("classList.toggle")?;
        validate_token(class)?;

        if self.has_class(class)? {
            self.remove_class(class)?;
            Ok(false)
        } else {
            self.add_class(class)?;
            Ok(true)
        }
    }

    fn has_class(&self, class: &str) -> Result<bool, DomError> {
        self.require_element("classList.contains")?;

        Ok(self
            .0
            .classes
            .borrow()
            .iter()
            .any(|existing| existing == class))
    }

    fn set_property(&self, name: &str, value: &Value) -> Result<(), DomError> {
        match name {
            "innerHTML" => return self.set_inner_html(&value.as_text()),
            "className" => {
                self.require_element("className")?;
                *self.0.classes.borrow_mut() = value
                    .as_text()
                    .split_ascii_whitespace()
                    .map(String::from)
                    .collect();
            }
            _ => (),
        }

        self.0
            .properties
            .borrow_mut()
            .insert(name.to_string(), value.clone());

        self.record(Mutation::PropertySet {
            node: self.id(),
            name: name.to_string(),
        });

        Ok(())
    }

    fn inner_html(&self) -> Result<String, DomError> {
        self.require_element("innerHTML")?;

        Ok(self.0.inner_html.borrow().clone())
    }

    fn set_inner_html(&self, html: &str) -> Result<(), DomError> {
        self.require_element("innerHTML")?;

        *self.0.inner_html.borrow_mut() = html.to_string();
        self.record(Mutation::HtmlSet { node: self.id() });

        Ok(())
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.adopt(child, "appendChild")?;

        self.0.children.borrow_mut().push(child.clone());
        self.record(Mutation::ChildAppended {
            parent: self.id(),
            child: child.id(),
        });

        Ok(())
    }

    fn prepend_child(&self, child: &Self) -> Result<(), DomError> {
        self.adopt(child, "insertBefore")?;

        self.0.children.borrow_mut().insert(0, child.clone());
        self.record(Mutation::ChildPrepended {
            parent: self.id(),
            child: child.id(),
        });

        Ok(())
    }

    fn add_listener(
        &self,
        event: &str,
        listener: &MemoryListener,
        capture: bool,
    ) -> Result<(), DomError> {
        let mut listeners = self.0.listeners.borrow_mut();

        // The same listener/capture pair is only registered once
        let registered = listeners
            .get(event)
            .iter()
            .any(|(existing, flag)| Rc::ptr_eq(existing, listener) && *flag == capture);

        if !registered {
            listeners.insert(event.to_string(), (Rc::clone(listener), capture));
            drop(listeners);

            self.record(Mutation::ListenerAdded {
                node: self.id(),
                event: event.to_string(),
            });
        }

        Ok(())
    }

    fn remove_listener(
        &self,
        event: &str,
        listener: &MemoryListener,
        capture: bool,
    ) -> Result<(), DomError> {
        let removed = self
            .0
            .listeners
            .borrow_mut()
            .remove_first(event, |(existing, flag)| {
                Rc::ptr_eq(existing, listener) && *flag == capture
            });

        if removed.is_some() {
            self.record(Mutation::ListenerRemoved {
                node: self.id(),
                event: event.to_string(),
            });
        }

        Ok(())
    }

    fn dispatch(&self, event: &MemoryEvent) -> Result<bool, DomError> {
        self.record(Mutation::Dispatched {
            node: self.id(),
            event: event.name().to_string(),
        });

        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while let Some(node) = current {
            current = node.parent();
            ancestors.push(node);
        }

        // Capture runs from the root down, then the target, then bubbling back up
        for node in <[MemoryNode]>::iter(&ancestors).rev() {
            node.invoke_listeners(event, |capture| capture);
        }
        self.invoke_listeners(event, |_| true);
        if event.bubbles() {
            for node in &ancestors {
                node.invoke_listeners(event, |capture| !capture);
            }
        }
        event.set_current_target(None);

        Ok(!event.default_prevented())
    }
}

/// Live [`Collection`] over the children of a [`MemoryNode`].
pub struct ChildNodes(MemoryNode);

impl Collection for ChildNodes {
    type Item = MemoryNode;

    fn length(&self) -> usize {
        self.0 .0.children.borrow().len()
    }

    fn item(&self, index: usize) -> Option<MemoryNode> {
        self.0 .0.children.borrow().get(index).cloned()
    }
}
