//! The document object model svgproxy drives.
//!
//! svgproxy never stores nodes or attributes itself. Everything goes through a
//! [`Host`], which owns the actual tree. Hosts are shared between handles by
//! reference and mutate through `&self`, the same way a browser DOM does.
//!
//! # Implementations
//!
//! - [`memory::MemoryDocument`] - an in-process arena tree
//! - `web::WebDocument` - the browser DOM through `web-sys` (feature `web`)

pub mod memory;
#[cfg(feature = "web")]
pub mod web;

use std::fmt;

/// A graphics document object model.
///
/// The four operations are the whole contract: create a namespaced element,
/// read and write string attributes, and append a child.
pub trait Host: fmt::Debug {
    /// A reference to a node owned by this host.
    ///
    /// Cloning a node clones the reference, never the node itself.
    type Node: Clone + PartialEq + fmt::Debug;

    /// The error the host reports when an operation is rejected.
    type Error: std::error::Error + 'static;

    /// Creates a detached element with `local_name` in `namespace`.
    fn create_element_ns(
        &self,
        namespace: &str,
        local_name: &str,
    ) -> Result<Self::Node, Self::Error>;

    /// Sets attribute `name` of `node` to `value`.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str)
    -> Result<(), Self::Error>;

    /// Returns the value of attribute `name` of `node`, if present.
    fn get_attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), Self::Error>;
}
