//! Capabilities the batch helpers are written against. Browser nodes implement them in
//! [`crate::web`], and in-memory nodes in [`crate::memory`].

mod collection;
mod element;
mod event;
mod value;

pub use collection::*;
pub use element::*;
pub use event::*;
pub use value::*;
