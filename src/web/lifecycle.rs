use web_sys::{Event, Window};

use super::ListenerRegistry;
use crate::{dom::EventType, DomError};

/// Hooks into the page lifecycle of a [`Window`]. Callbacks stay bound for as long as the
/// [`Lifecycle`] is alive; dropping it unbinds them all. Use [`Lifecycle::forget()`] to keep them
/// bound for the lifetime of the page.
pub struct Lifecycle {
    window: Window,
    registry: ListenerRegistry,

    /// Every event type something has been bound to, in binding order.
    bound: Vec<EventType>,
}

impl Lifecycle {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
            registry: ListenerRegistry::new(),
            bound: Vec::new(),
        }
    }

    /// Run `callback` once the page and all of its resources have loaded.
    pub fn on_load<F>(&mut self, callback: F) -> Result<(), DomError>
    where
        F: 'static + FnMut(Event),
    {
        self.bind(EventType::Load, callback)
    }

    /// Run `callback` once the DOM tree has been built, without waiting on resources.
    pub fn on_ready<F>(&mut self, callback: F) -> Result<(), DomError>
    where
        F: 'static + FnMut(Event),
    {
        self.bind(EventType::DomContentLoaded, callback)
    }

    /// Run `callback` right before the page is navigated away from.
    pub fn on_navigate<F>(&mut self, callback: F) -> Result<(), DomError>
    where
        F: 'static + FnMut(Event),
    {
        self.bind(EventType::BeforeUnload, callback)
    }

    /// Leak the bound callbacks so they keep firing after this handle goes away.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    fn bind<F>(&mut self, event: EventType, callback: F) -> Result<(), DomError>
    where
        F: 'static + FnMut(Event),
    {
        let function = self.registry.register(event.name(), callback);
        if let Err(error) = self
            .window
            .add_event_listener_with_callback(event.name(), &function)
        {
            self.registry.unregister(event.name(), &function);
            return Err(error.into());
        }

        if !self.bound.contains(&event) {
            self.bound.push(event);
        }

        Ok(())
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        for event in &self.bound {
            for function in self.registry.functions(event.name()) {
                if let Err(error) = self
                    .window
                    .remove_event_listener_with_callback(event.name(), function)
                {
                    tracing::warn!(event = event.name(), ?error, "failed to unbind listener");
                }
            }
        }
    }
}
