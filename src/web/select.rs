use web_sys::{Document, Element as WsElement, HtmlCollection, Node as WsNode, NodeList};

use crate::{DomError, Elements};

/// Element lookups scoped to a [`Document`] or to the descendants of a [`web_sys::Element`].
pub trait Select {
    /// All nodes matching the CSS `selectors`, as a static list.
    fn select_all(&self, selectors: &str) -> Result<Elements<NodeList>, DomError>;

    /// The first node matching the CSS `selectors`.
    fn select_first(&self, selectors: &str) -> Result<Option<WsNode>, DomError>;

    /// Live list of elements carrying `class`.
    fn by_class(&self, class: &str) -> Elements<HtmlCollection>;

    /// Live list of elements with the tag name `tag`.
    fn by_tag(&self, tag: &str) -> Elements<HtmlCollection>;

    /// Live list of elements with the local name `tag` in `namespace`.
    fn by_tag_ns(
        &self,
        namespace: Option<&str>,
        tag: &str,
    ) -> Result<Elements<HtmlCollection>, DomError>;
}

impl Select for Document {
    fn select_all(&self, selectors: &str) -> Result<Elements<NodeList>, DomError> {
        Ok(self.query_selector_all(selectors)?.into())
    }

    fn select_first(&self, selectors: &str) -> Result<Option<WsNode>, DomError> {
        Ok(self.query_selector(selectors)?.map(WsNode::from))
    }

    fn by_class(&self, class: &str) -> Elements<HtmlCollection> {
        self.get_elements_by_class_name(class).into()
    }

    fn by_tag(&self, tag: &str) -> Elements<HtmlCollection> {
        self.get_elements_by_tag_name(tag).into()
    }

    fn by_tag_ns(
        &self,
        namespace: Option<&str>,
        tag: &str,
    ) -> Result<Elements<HtmlCollection>, DomError> {
        Ok(self.get_elements_by_tag_name_ns(namespace, tag)?.into())
    }
}

impl Select for WsElement {
    fn select_all(&self, selectors: &str) -> Result<Elements<NodeList>, DomError> {
        Ok(self.query_selector_all(selectors)?.into())
    }

    fn select_first(&self, selectors: &str) -> Result<Option<WsNode>, DomError> {
        Ok(self.query_selector(selectors)?.map(WsNode::from))
    }

    fn by_class(&self, class: &str) -> Elements<HtmlCollection> {
        self.get_elements_by_class_name(class).into()
    }

    fn by_tag(&self, tag: &str) -> Elements<HtmlCollection> {
        self.get_elements_by_tag_name(tag).into()
    }

    fn by_tag_ns(
        &self,
        namespace: Option<&str>,
        tag: &str,
    ) -> Result<Elements<HtmlCollection>, DomError> {
        Ok(self.get_elements_by_tag_name_ns(namespace, tag)?.into())
    }
}

/// The element with the provided `id`. Only documents index by id.
pub fn by_id(document: &Document, id: &str) -> Option<WsNode> {
    document.get_element_by_id(id).map(WsNode::from)
}

/// Live list of elements whose `name` attribute is `name`.
pub fn by_name(document: &Document, name: &str) -> Elements<NodeList> {
    document.get_elements_by_name(name).into()
}

/// Whether `node` is any of the nodes in `scope` matching `selectors`.
pub fn is_any<S>(scope: &S, node: &WsNode, selectors: &str) -> Result<bool, DomError>
where
    S: Select + ?Sized,
{
    Ok(scope.select_all(selectors)?.iter().any(|candidate| &candidate == node))
}

/// Whether `node` is the first node in `scope` matching `selectors`.
pub fn is_first<S>(scope: &S, node: &WsNode, selectors: &str) -> Result<bool, DomError>
where
    S: Select + ?Sized,
{
    Ok(scope.select_first(selectors)?.as_ref() == Some(node))
}
