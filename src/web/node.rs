use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomTokenList, Element as WsElement, Event, HtmlCollection, Node as WsNode, NodeList};

use crate::{
    dom::{Collection, Element, Value},
    DomError,
};

/// Casts the node to an element, which is required for class lists and inner HTML. Text,
/// comment and document nodes fail with [`DomError::UnsupportedOperation`].
fn as_element<'a>(node: &'a WsNode, operation: &'static str) -> Result<&'a WsElement, DomError> {
    node.dyn_ref::<WsElement>()
        .ok_or(DomError::unsupported(operation))
}

fn class_list(node: &WsNode, operation: &'static str) -> Result<DomTokenList, DomError> {
    as_element(node, operation).map(WsElement::class_list)
}

impl Element for WsNode {
    type Listener = Function;
    type Event = Event;

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        class_list(self, "classList.add")?
            .add_1(class)
            .map_err(|exception| DomError::from_class_list(class, exception))
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        class_list(self, "classList.remove")?
            .remove_1(class)
            .map_err(|exception| DomError::from_class_list(class, exception))
    }

    fn toggle_class(&self, class: &str) -> Result<bool, DomError> {
        class_list(self, "classList.toggle")?
            .toggle(class)
            .map_err(|exception| DomError::from_class_list(class, exception))
    }

    fn has_class(&self, class: &str) -> Result<bool, DomError> {
        Ok(class_list(self, "classList.contains")?.contains(class))
    }

    fn set_property(&self, name: &str, value: &Value) -> Result<(), DomError> {
        // Like a plain assignment, a rejected write is not an error
        Reflect::set(self, &JsValue::from_str(name), &JsValue::from(value))?;
        Ok(())
    }

    fn inner_html(&self) -> Result<String, DomError> {
        Ok(as_element(self, "innerHTML")?.inner_html())
    }

    fn set_inner_html(&self, html: &str) -> Result<(), DomError> {
        as_element(self, "innerHTML")?.set_inner_html(html);
        Ok(())
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        WsNode::append_child(self, child)?;
        Ok(())
    }

    fn prepend_child(&self, child: &Self) -> Result<(), DomError> {
        self.insert_before(child, self.first_child().as_ref())?;
        Ok(())
    }

    fn add_listener(
        &self,
        event: &str,
        listener: &Function,
        capture: bool,
    ) -> Result<(), DomError> {
        self.add_event_listener_with_callback_and_bool(event, listener, capture)?;
        Ok(())
    }

    fn remove_listener(
        &self,
        event: &str,
        listener: &Function,
        capture: bool,
    ) -> Result<(), DomError> {
        self.remove_event_listener_with_callback_and_bool(event, listener, capture)?;
        Ok(())
    }

    fn dispatch(&self, event: &Event) -> Result<bool, DomError> {
        Ok(self.dispatch_event(event)?)
    }
}

/// Static list returned by `querySelectorAll()`, or live list from `childNodes` and
/// `getElementsByName()`.
impl Collection for NodeList {
    type Item = WsNode;

    fn length(&self) -> usize {
        NodeList::length(self) as usize
    }

    fn item(&self, index: usize) -> Option<WsNode> {
        u32::try_from(index)
            .ok()
            .and_then(|index| NodeList::item(self, index))
    }
}

/// Live list returned by `getElementsByClassName()` and `getElementsByTagName()`.
impl Collection for HtmlCollection {
    type Item = WsNode;

    fn length(&self) -> usize {
        HtmlCollection::length(self) as usize
    }

    fn item(&self, index: usize) -> Option<WsNode> {
        u32::try_from(index)
            .ok()
            .and_then(|index| HtmlCollection::item(self, index))
            .map(WsNode::from)
    }
}
