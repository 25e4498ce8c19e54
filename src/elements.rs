use std::ops::Deref;

use crate::{
    batch::{self, Operation},
    class_list,
    dom::{Collection, Element, Iter, Value},
    DomError,
};

/// A [`Collection`] with the batch helpers available as methods, eg.
/// `Elements::from(list).add_classes(["active", "open"])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Elements<C>(C);

/// Generates methods that forward to one of the free batch functions, passing the wrapped
/// collection as the first argument.
macro_rules! forward {
    ($(
        $(#[$meta:meta])*
        $name:ident => $module:ident::$function:ident($($arg:ident: $ty:ty),*) -> $ret:ty;
    )*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, $($arg: $ty),*) -> Result<$ret, DomError> {
                $module::$function(&self.0, $($arg),*)
            }
        )*
    };
}

impl<C> Elements<C>
where
    C: Collection,
{
    pub fn new(collection: C) -> Self {
        Self(collection)
    }

    pub fn into_inner(self) -> C {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.length()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<C::Item> {
        self.0.item(index)
    }

    pub fn iter(&self) -> Iter<'_, C> {
        self.0.iter()
    }

    /// Run `callback` for each element with its index. See [`batch::each()`].
    pub fn each<F>(&self, callback: F) -> Result<(), DomError>
    where
        F: FnMut(usize, &C::Item) -> Result<(), DomError>,
    {
        batch::each(&self.0, callback)
    }

    /// Apply an arbitrary [`Operation`] to each element.
    pub fn apply(&self, operation: &Operation<'_, C::Item>) -> Result<(), DomError> {
        batch::for_each_apply(&self.0, operation)
    }

    /// Assign the property `name` on each element.
    pub fn attr<V>(&self, name: &str, value: V) -> Result<(), DomError>
    where
        V: Into<Value>,
    {
        self.apply(&Operation::SetProperty {
            name,
            value: &value.into(),
        })
    }

    /// Replace the inner HTML of each element.
    pub fn html(&self, html: &str) -> Result<(), DomError> {
        self.apply(&Operation::SetHtml(html))
    }

    /// Set the `value` property of each element.
    pub fn val(&self, value: &str) -> Result<(), DomError> {
        self.apply(&Operation::SetValue(value))
    }

    /// Append `html` to the inner HTML of each element.
    pub fn append(&self, html: &str) -> Result<(), DomError> {
        self.apply(&Operation::AppendHtml(html))
    }

    /// Prepend `html` to the inner HTML of each element.
    pub fn prepend(&self, html: &str) -> Result<(), DomError> {
        self.apply(&Operation::PrependHtml(html))
    }

    pub fn on(
        &self,
        event: &str,
        listener: &<C::Item as Element>::Listener,
        capture: bool,
    ) -> Result<(), DomError> {
        self.apply(&Operation::Listen {
            event,
            listener,
            capture,
        })
    }

    pub fn off(
        &self,
        event: &str,
        listener: &<C::Item as Element>::Listener,
        capture: bool,
    ) -> Result<(), DomError> {
        self.apply(&Operation::Unlisten {
            event,
            listener,
            capture,
        })
    }

    /// Dispatch the same event at each element.
    pub fn dispatch(&self, event: &<C::Item as Element>::Event) -> Result<(), DomError> {
        self.apply(&Operation::Dispatch(event))
    }

    forward! {
        /// Append each element to `host`.
        append_to => batch::append_to(host: &C::Item) -> ();
        /// Insert each element at the front of `host`, ending up in reverse order.
        prepend_to => batch::prepend_to(host: &C::Item) -> ();
        add_class => class_list::add_class(class: &str) -> ();
        remove_class => class_list::remove_class(class: &str) -> ();
        toggle_class => class_list::toggle_class(class: &str) -> ();
        /// Whether every element has `class`.
        have_class => class_list::have_class(class: &str) -> bool;
    }

    /// Append element `i` to host `i`.
    pub fn append_to_multiple<H>(&self, hosts: &H) -> Result<(), DomError>
    where
        H: Collection<Item = C::Item>,
    {
        batch::append_to_multiple(&self.0, hosts)
    }

    /// Insert element `i` at the front of host `i`.
    pub fn prepend_to_multiple<H>(&self, hosts: &H) -> Result<(), DomError>
    where
        H: Collection<Item = C::Item>,
    {
        batch::prepend_to_multiple(&self.0, hosts)
    }

    pub fn add_classes<I, S>(&self, classes: I) -> Result<(), DomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        class_list::add_classes(&self.0, classes)
    }

    pub fn remove_classes<I, S>(&self, classes: I) -> Result<(), DomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        class_list::remove_classes(&self.0, classes)
    }

    pub fn toggle_classes<I, S>(&self, classes: I) -> Result<(), DomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        class_list::toggle_classes(&self.0, classes)
    }

    /// Whether every element has every class, stopping at the first class that fails.
    pub fn have_classes<I, S>(&self, classes: I) -> Result<bool, DomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        class_list::have_classes(&self.0, classes)
    }
}

impl<C> From<C> for Elements<C>
where
    C: Collection,
{
    fn from(collection: C) -> Self {
        Self(collection)
    }
}

impl<C> Deref for Elements<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C> Collection for Elements<C>
where
    C: Collection,
{
    type Item = C::Item;

    fn length(&self) -> usize {
        self.0.length()
    }

    fn item(&self, index: usize) -> Option<C::Item> {
        self.0.item(index)
    }
}
