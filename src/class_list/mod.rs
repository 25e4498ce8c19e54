//! Batch editing and checking of class sets across a [`Collection`].
//!
//! Multi-class edits are a nested loop: class names on the outside (in the order given), elements
//! on the inside (in index order). For `add_classes([e0, e1], ["a", "b"])` the native mutations
//! happen as `e0 += a`, `e1 += a`, `e0 += b`, `e1 += b`.
//!
//! Class names are handed to the backend as-is. Malformed tokens are rejected by the backend,
//! aborting the pass like any other failure.

use crate::{
    batch::{for_each_apply, Operation},
    dom::{Collection, Element},
    DomError,
};

/// The edits that can be applied to a class set in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassEdit {
    Add,
    Remove,
    Toggle,
}

impl ClassEdit {
    /// Build the per-element [`Operation`] for this edit.
    pub fn operation<E>(self, class: &str) -> Operation<'_, E>
    where
        E: Element,
    {
        match self {
            ClassEdit::Add => Operation::AddClass(class),
            ClassEdit::Remove => Operation::RemoveClass(class),
            ClassEdit::Toggle => Operation::ToggleClass(class),
        }
    }
}

/// Check that `token` can be used as a class name: it must be non-empty and contain no ASCII
/// whitespace. Backends that don't get this check from their host should call it before mutating.
pub fn validate_token(token: &str) -> Result<(), DomError> {
    if token.is_empty() || token.contains(|c: char| c.is_ascii_whitespace()) {
        Err(DomError::InvalidClassName(token.to_string()))
    } else {
        Ok(())
    }
}

/// Add `class` to every element. Elements already carrying it are unchanged.
pub fn add_class<C>(collection: &C, class: &str) -> Result<(), DomError>
where
    C: Collection + ?Sized,
{
    for_each_apply(collection, &Operation::AddClass(class))
}

/// Remove `class` from every element that carries it.
pub fn remove_class<C>(collection: &C, class: &str) -> Result<(), DomError>
where
    C: Collection + ?Sized,
{
    for_each_apply(collection, &Operation::RemoveClass(class))
}

/// Flip `class` on every element, independently of the others.
pub fn toggle_class<C>(collection: &C, class: &str) -> Result<(), DomError>
where
    C: Collection + ?Sized,
{
    for_each_apply(collection, &Operation::ToggleClass(class))
}

pub fn add_classes<C, I, S>(collection: &C, classes: I) -> Result<(), DomError>
where
    C: Collection + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    edit_class_list(collection, classes, ClassEdit::Add)
}

pub fn remove_classes<C, I, S>(collection: &C, classes: I) -> Result<(), DomError>
where
    C: Collection + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    edit_class_list(collection, classes, ClassEdit::Remove)
}

/// Toggle each class name in turn. Every (element, class) pair is flipped on its own; there is no
/// shared direction for the batch.
pub fn toggle_classes<C, I, S>(collection: &C, classes: I) -> Result<(), DomError>
where
    C: Collection + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    edit_class_list(collection, classes, ClassEdit::Toggle)
}

/// Apply `edit` for each class name, in order, across the whole collection.
pub fn edit_class_list<C, I, S>(collection: &C, classes: I, edit: ClassEdit) -> Result<(), DomError>
where
    C: Collection + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for class in classes {
        for_each_apply(collection, &edit.operation(class.as_ref()))?;
    }

    Ok(())
}

/// Whether every element carries `class`. Stops at the first element without it. An empty
/// collection vacuously passes.
pub fn have_class<C>(collection: &C, class: &str) -> Result<bool, DomError>
where
    C: Collection + ?Sized,
{
    for element in collection.iter() {
        if !element.has_class(class)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Whether every element carries every class in `classes`. Checking stops at the first class name
/// that [`have_class()`] rejects; later names are never looked at.
pub fn have_classes<C, I, S>(collection: &C, classes: I) -> Result<bool, DomError>
where
    C: Collection + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for class in classes {
        if !have_class(collection, class.as_ref())? {
            tracing::trace!(class = class.as_ref(), "class missing, skipping the rest");
            return Ok(false);
        }
    }

    Ok(true)
}
