use super::each;
use crate::{
    dom::{Collection, Element},
    DomError,
};

/// Append every element of `collection` to `host`, in index order.
///
/// Moving nodes can change a live collection while it is being walked (eg. when `collection` is
/// the child list of another node), in which case the result is unspecified.
pub fn append_to<C>(collection: &C, host: &C::Item) -> Result<(), DomError>
where
    C: Collection + ?Sized,
{
    each(collection, |_, element| host.append_child(element))
}

/// Insert every element of `collection` before the current first child of `host`, in index order.
/// As each insertion goes to the front, the elements end up in reverse order.
pub fn prepend_to<C>(collection: &C, host: &C::Item) -> Result<(), DomError>
where
    C: Collection + ?Sized,
{
    each(collection, |_, element| host.prepend_child(element))
}

/// Append element `i` of `collection` to host `i`, for every host.
pub fn append_to_multiple<C, H>(collection: &C, hosts: &H) -> Result<(), DomError>
where
    C: Collection + ?Sized,
    H: Collection<Item = C::Item> + ?Sized,
{
    each(hosts, |index, host| host.append_child(&paired_item(collection, index)?))
}

/// Insert element `i` of `collection` before the first child of host `i`, for every host.
pub fn prepend_to_multiple<C, H>(collection: &C, hosts: &H) -> Result<(), DomError>
where
    C: Collection + ?Sized,
    H: Collection<Item = C::Item> + ?Sized,
{
    each(hosts, |index, host| host.prepend_child(&paired_item(collection, index)?))
}

/// Helper to fetch the item paired with a host, failing once the collection runs out.
fn paired_item<C>(collection: &C, index: usize) -> Result<C::Item, DomError>
where
    C: Collection + ?Sized,
{
    collection.item(index).ok_or(DomError::OutOfBounds {
        index,
        length: collection.length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryNode, Mutation};

    #[test]
    fn append_keeps_order() {
        let document = MemoryDocument::new();
        let host = document.element("ul");
        let items = vec![document.element("li"), document.element("li")];

        append_to(&items, &host).unwrap();

        assert_eq!(host.children(), items);
        assert!(items
            .iter()
            .all(|item| item.parent().as_ref() == Some(&host)));
    }

    #[test]
    fn prepend_reverses_order() {
        let document = MemoryDocument::new();
        let host = document.element("ul");
        let existing = document.element("li");
        host.append_child(&existing).unwrap();

        let items = vec![document.element("li"), document.element("li")];
        prepend_to(&items, &host).unwrap();

        assert_eq!(
            host.children(),
            vec![items[1].clone(), items[0].clone(), existing]
        );
    }

    #[test]
    fn moving_from_previous_parent() {
        let document = MemoryDocument::new();
        let from = document.element("div");
        let to = document.element("div");
        let child = document.element("span");
        from.append_child(&child).unwrap();

        append_to(&vec![child.clone()], &to).unwrap();

        assert!(from.children().is_empty());
        assert_eq!(to.children(), vec![child]);
    }

    #[test]
    fn pairs_items_with_hosts() {
        let document = MemoryDocument::new();
        let hosts = vec![document.element("div"), document.element("div")];
        let items = vec![document.element("a"), document.element("b")];
        document.clear_mutations();

        append_to_multiple(&items, &hosts).unwrap();

        assert_eq!(hosts[0].children(), vec![items[0].clone()]);
        assert_eq!(hosts[1].children(), vec![items[1].clone()]);
        assert_eq!(
            document.mutations(),
            vec![
                Mutation::ChildAppended {
                    parent: hosts[0].id(),
                    child: items[0].id()
                },
                Mutation::ChildAppended {
                    parent: hosts[1].id(),
                    child: items[1].id()
                },
            ]
        );
    }

    #[test]
    fn prepend_to_multiple_goes_before_existing() {
        let document = MemoryDocument::new();
        let host = document.element("div");
        let existing = document.text("tail");
        host.append_child(&existing).unwrap();
        let item = document.element("b");

        prepend_to_multiple(&vec![item.clone()], &vec![host.clone()]).unwrap();

        assert_eq!(host.children(), vec![item, existing]);
    }

    #[test]
    fn more_hosts_than_items_fails_after_placing_the_pairs() {
        let document = MemoryDocument::new();
        let hosts = vec![document.element("div"), document.element("div")];
        let items = vec![document.element("a")];

        let result = append_to_multiple(&items, &hosts);

        assert_eq!(result, Err(DomError::OutOfBounds { index: 1, length: 1 }));
        assert_eq!(hosts[0].children(), items);
        assert!(hosts[1].children().is_empty());
    }

    #[test]
    fn live_child_list_as_source() {
        let document = MemoryDocument::new();
        let from = document.element("div");
        let to = document.element("div");
        for _ in 0..4 {
            from.append_child(&document.element("span")).unwrap();
        }

        // Moving out of a live list shifts the remaining items down, so every other item is
        // skipped. This is the unspecified-but-observable behaviour of live collections.
        append_to(&from.child_nodes(), &to).unwrap();

        assert_eq!(from.children().len(), 2);
        assert_eq!(to.children().len(), 2);
        assert!(to.children().iter().all(|node| node.is_element()));
    }
}
