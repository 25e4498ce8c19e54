use js_sys::Function;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventInit, MouseEvent, MouseEventInit, Node as WsNode, Window};

use crate::{
    batch::{for_each_apply, Operation},
    dom::{Collection, EventType},
    util::HashMapList,
    DomError,
};

/// Build a bubbling, cancelable synthetic event. Mouse-like types (see [`EventType::is_mouse()`])
/// are created as a [`MouseEvent`] viewed from `window`; everything else is a plain [`Event`].
pub fn create_event(window: &Window, event: &EventType) -> Result<Event, DomError> {
    if event.is_mouse() {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_view(Some(window));

        Ok(MouseEvent::new_with_mouse_event_init_dict(event.name(), &init)?.into())
    } else {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);

        Ok(Event::new_with_event_init_dict(event.name(), &init)?)
    }
}

/// Create a single event of type `event` and dispatch it at every element of `collection`, in
/// index order.
pub fn trigger<C, T>(collection: &C, window: &Window, event: T) -> Result<(), DomError>
where
    C: Collection<Item = WsNode> + ?Sized,
    T: Into<EventType>,
{
    let event = create_event(window, &event.into())?;

    for_each_apply(collection, &Operation::Dispatch(&event))
}

/// A registry of JS closures created for event listeners, grouped by event name. The closures live
/// as long as the registry, so any [`Function`] handed out must be unbound from its target before
/// the registry is dropped.
#[derive(Default)]
pub struct ListenerRegistry {
    closures: HashMapList<String, Closure<dyn FnMut(Event)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `callback` in a closure owned by the registry, returning the [`Function`] to bind.
    pub fn register<F>(&mut self, event: &str, callback: F) -> Function
    where
        F: 'static + FnMut(Event),
    {
        tracing::debug!(event, "creating listener");

        let closure = Closure::<dyn FnMut(Event)>::new(callback);
        let function = closure.as_ref().unchecked_ref::<Function>().clone();
        self.closures.insert(event.to_string(), closure);

        function
    }

    /// Drop the closure behind `function`, returning whether one was registered for `event`. The
    /// function must no longer be bound anywhere.
    pub fn unregister(&mut self, event: &str, function: &Function) -> bool {
        self.closures
            .remove_first(event, |closure| {
                closure.as_ref().unchecked_ref::<Function>() == function
            })
            .is_some()
    }

    /// Functions registered for `event`, in registration order.
    pub fn functions<'a>(&'a self, event: &str) -> impl Iterator<Item = &'a Function> + 'a {
        self.closures
            .get(event)
            .iter()
            .map(|closure| closure.as_ref().unchecked_ref::<Function>())
    }
}
