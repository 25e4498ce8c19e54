//! Browser backend, built on `web-sys`. [`web_sys::Node`] implements [`crate::dom::Element`], and
//! `NodeList`/`HtmlCollection` implement [`crate::dom::Collection`], so every batch helper works
//! on the results of the selectors here.

mod event;
mod lifecycle;
mod node;
mod select;

pub use event::*;
pub use lifecycle::*;
pub use select::*;
