use super::Element;

/// An ordered, indexable group of nodes, such as the result of `querySelectorAll()`.
///
/// A collection may be a live view over the document, in which case [`Self::length()`] and
/// [`Self::item()`] reflect the document as it is at the moment they are called. Nothing here takes
/// a snapshot: if an operation mutates the document in a way that changes a live collection while
/// it is being traversed, the rest of that traversal is unspecified.
pub trait Collection {
    type Item: Element;

    fn length(&self) -> usize;

    /// Retrieve the item at `index`, or [`None`] if it is past the end.
    fn item(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Iterate items in ascending index order.
    fn iter(&self) -> Iter<'_, Self> {
        Iter {
            collection: self,
            index: 0,
        }
    }
}

/// Index-order iterator over a [`Collection`]. The length is re-read before every step.
pub struct Iter<'a, C>
where
    C: Collection + ?Sized,
{
    collection: &'a C,
    index: usize,
}

impl<C> Iterator for Iter<'_, C>
where
    C: Collection + ?Sized,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.collection.length() {
            return None;
        }

        let item = self.collection.item(self.index);
        self.index += 1;
        item
    }
}

impl<E> Collection for [E]
where
    E: Element,
{
    type Item = E;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<E> {
        self.get(index).cloned()
    }
}

impl<E> Collection for Vec<E>
where
    E: Element,
{
    type Item = E;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<E> {
        self.get(index).cloned()
    }
}

impl<C> Collection for &C
where
    C: Collection + ?Sized,
{
    type Item = C::Item;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn item(&self, index: usize) -> Option<Self::Item> {
        (**self).item(index)
    }
}
