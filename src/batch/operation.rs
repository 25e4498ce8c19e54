use crate::{
    dom::{Element, Value},
    DomError,
};

/// A single per-element operation that can be applied across a whole collection with
/// [`super::for_each_apply()`]. This is the closed set of things the batch helpers know how to
/// forward to a node.
pub enum Operation<'a, E>
where
    E: Element,
{
    /// Assign an arbitrary property, as `node[name] = value`.
    SetProperty { name: &'a str, value: &'a Value },

    /// Assign the `value` property.
    SetValue(&'a str),

    /// Replace the inner HTML.
    SetHtml(&'a str),

    /// Append to the end of the existing inner HTML.
    AppendHtml(&'a str),

    /// Prepend to the start of the existing inner HTML.
    PrependHtml(&'a str),

    AddClass(&'a str),
    RemoveClass(&'a str),
    ToggleClass(&'a str),

    /// Attach an event listener.
    Listen {
        event: &'a str,
        listener: &'a E::Listener,
        capture: bool,
    },

    /// Detach a previously attached event listener.
    Unlisten {
        event: &'a str,
        listener: &'a E::Listener,
        capture: bool,
    },

    /// Dispatch the same event object at each node.
    Dispatch(&'a E::Event),
}

impl<E> Operation<'_, E>
where
    E: Element,
{
    /// Name of the native call this operation forwards to.
    pub fn name(&self) -> &'static str {
        use Operation::*;

        match self {
            SetProperty { .. } => "setProperty",
            SetValue(_) => "value",
            SetHtml(_) => "innerHTML",
            AppendHtml(_) => "appendHTML",
            PrependHtml(_) => "prependHTML",
            AddClass(_) => "classList.add",
            RemoveClass(_) => "classList.remove",
            ToggleClass(_) => "classList.toggle",
            Listen { .. } => "addEventListener",
            Unlisten { .. } => "removeEventListener",
            Dispatch(_) => "dispatchEvent",
        }
    }

    /// Apply the operation to a single element. Any value produced by the underlying call is
    /// discarded.
    pub fn apply(&self, element: &E) -> Result<(), DomError> {
        use Operation::*;

        match self {
            SetProperty { name, value } => element.set_property(name, value),
            SetValue(value) => element.set_property("value", &Value::from(*value)),
            SetHtml(html) => element.set_inner_html(html),
            AppendHtml(html) => {
                let current = element.inner_html()?;
                element.set_inner_html(&(current + *html))
            }
            PrependHtml(html) => {
                let current = element.inner_html()?;
                element.set_inner_html(&format!("{html}{current}"))
            }
            AddClass(class) => element.add_class(class),
            RemoveClass(class) => element.remove_class(class),
            ToggleClass(class) => element.toggle_class(class).map(|_| ()),
            Listen {
                event,
                listener,
                capture,
            } => element.add_listener(event, listener, *capture),
            Unlisten {
                event,
                listener,
                capture,
            } => element.remove_listener(event, listener, *capture),
            Dispatch(event) => element.dispatch(event).map(|_| ()),
        }
    }
}
