//! svgproxy - Property-style construction of SVG document trees.
//!
//! Instead of the create-namespaced-element / set-attribute protocol of a
//! document object model, svgproxy lets a caller ask a handle for an element
//! kind by name and read or write attributes by name:
//!
//! - `handle.invoke("circle", attrs)` creates a `<circle>` and appends it to
//!   the handle's node; `handle.invoke("createCircle", attrs)` creates it
//!   detached.
//! - `handle.set("r", 50)` writes the `r` attribute; `handle.get("r")` reads
//!   it back.
//! - `handle.get("root")` returns the wrapped host node.
//!
//! The document itself lives in a [`host::Host`]. [`host::memory::MemoryDocument`]
//! keeps it in memory; with the `web` feature, `host::web::WebDocument` drives
//! the browser DOM.
//!
//! # Example
//!
//! ```
//! use svgproxy::{Attributes, Intercept, Session, host::memory::MemoryDocument};
//!
//! let session = Session::new(MemoryDocument::new(), Attributes::new().with("width", 64))?;
//!
//! let group = session.invoke("g", Attributes::new().with("class", "marks"))?;
//! let mut dot = group.invoke("circle", Attributes::new().with("cx", 1).with("cy", 1))?;
//! dot.set("r", 0.5)?;
//!
//! let host = session.host();
//! assert_eq!(host.parent(*dot.root()), Some(*group.root()));
//! assert_eq!(host.parent(*group.root()), Some(*session.root()));
//! assert_eq!(dot.attribute("r").as_deref(), Some("0.5"));
//! # Ok::<(), svgproxy::SvgProxyError>(())
//! ```

pub mod config;

mod access;
mod element;
mod error;
mod handler;
mod session;

pub use svgproxy_core::{SVG_NAMESPACE, attribute, host, kind};

pub use svgproxy_core::{
    attribute::{AttrValue, Attributes},
    kind::ElementKind,
};

pub use element::ElementHandle;
pub use error::SvgProxyError;
pub use handler::{Creator, Handler, Intercept, Property, Resolved, Value};
pub use session::Session;
