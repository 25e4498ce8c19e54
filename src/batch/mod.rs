//! Applying per-element work across a whole [`Collection`].
//!
//! Every traversal here is a single synchronous pass in ascending index order. The first failure
//! aborts the pass and is returned unchanged; nodes before the failing index keep their changes
//! and nodes after it are never visited.

mod operation;
mod placement;

pub use operation::*;
pub use placement::*;

use crate::{dom::Collection, DomError};

/// Apply `operation` to every element of `collection`, in index order.
pub fn for_each_apply<C>(collection: &C, operation: &Operation<'_, C::Item>) -> Result<(), DomError>
where
    C: Collection + ?Sized,
{
    tracing::trace!(
        operation = operation.name(),
        length = collection.length(),
        "applying to collection"
    );

    each(collection, |index, element| {
        operation.apply(element).inspect_err(|error| {
            tracing::debug!(
                operation = operation.name(),
                index,
                %error,
                "aborting batch"
            );
        })
    })
}

/// Run `callback` with the index and element for every element of `collection`, in index order.
/// Returning an error from the callback stops the traversal and propagates that error.
pub fn each<C, F>(collection: &C, mut callback: F) -> Result<(), DomError>
where
    C: Collection + ?Sized,
    F: FnMut(usize, &C::Item) -> Result<(), DomError>,
{
    for (index, element) in collection.iter().enumerate() {
        tracing::trace!(index, "visiting element");
        callback(index, &element)?;
    }

    Ok(())
}
