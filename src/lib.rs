//! Shorthand selectors and batch operations over the browser DOM.
//!
//! Select a collection (see [`web::Select`]), wrap it in [`Elements`], and apply an operation to
//! every node in it:
//!
//! ```ignore
//! use wquery::web::Select;
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let tabs = document.select_all(".tab")?;
//! tabs.add_classes(["ready", "visible"])?;
//! let all_ready = tabs.have_classes(["ready"])?;
//! ```
//!
//! All operations are synchronous and walk a collection once, in index order. The first failing
//! node aborts the walk and its error is returned as-is; earlier nodes keep their changes.
//!
//! The batch helpers are written against the [`dom::Element`] and [`dom::Collection`] traits.
//! Besides the browser ([`web`]), they are implemented by an in-memory tree ([`memory`]), which is
//! what the host-side tests run against.

pub mod batch;
pub mod class_list;
mod config;
pub mod dom;
mod elements;
mod error;
pub mod memory;
mod util;
pub mod web;

pub use config::{init_with, Config};
pub use elements::Elements;
pub use error::DomError;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging with the default [`Config`].
#[wasm_bindgen]
pub fn init() {
    init_with(&Config::default());
}
