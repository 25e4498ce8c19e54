use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

/// Failure raised while applying an operation to a node. Every batch operation stops at the first
/// of these and hands it straight back to the caller, leaving earlier nodes mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    /// The node does not have the capability the operation needs (eg. classes on a text node).
    #[error("`{operation}` is not supported by this node")]
    UnsupportedOperation { operation: &'static str },

    /// A class token was empty or contained whitespace.
    #[error("invalid class name {0:?}")]
    InvalidClassName(String),

    /// A paired operation reached past the end of a collection.
    #[error("no item at index {index} (collection length {length})")]
    OutOfBounds { index: usize, length: usize },

    /// Any other exception thrown by the host document.
    #[error("{0}")]
    Host(String),
}

impl DomError {
    pub fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation { operation }
    }

    /// Translates an exception thrown by a `DOMTokenList` method. Token errors become
    /// [`DomError::InvalidClassName`], anything else falls through to [`DomError::Host`].
    pub fn from_class_list(token: &str, exception: JsValue) -> Self {
        let name = exception.dyn_ref::<DomException>().map(DomException::name);

        match name.as_deref() {
            Some("SyntaxError" | "InvalidCharacterError") => {
                Self::InvalidClassName(token.to_string())
            }
            _ => exception.into(),
        }
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        if let Some(exception) = value.dyn_ref::<DomException>() {
            return Self::Host(format!("{}: {}", exception.name(), exception.message()));
        }

        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return Self::Host(String::from(error.message()));
        }

        Self::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<DomError> for JsValue {
    fn from(error: DomError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            DomError::unsupported("classList.add").to_string(),
            "`classList.add` is not supported by this node"
        );
        assert_eq!(
            DomError::InvalidClassName("a b".into()).to_string(),
            "invalid class name \"a b\""
        );
        assert_eq!(
            DomError::OutOfBounds { index: 2, length: 1 }.to_string(),
            "no item at index 2 (collection length 1)"
        );
    }
}
