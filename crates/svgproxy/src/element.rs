//! The element wrapper.

use svgproxy_core::host::Host;

use crate::handler::{Handler, Intercept, Property};

/// A handle over one host element.
///
/// The wrapped node is fixed for the life of the handle: `root` is read-only,
/// so `set("root", …)` on an element writes a literal `root` attribute.
/// Wrapping a node twice gives two independent handles over the same node.
#[derive(Debug)]
pub struct ElementHandle<H: Host> {
    handler: Handler<H>,
    root: H::Node,
}

impl<H: Host> Clone for ElementHandle<H> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            root: self.root.clone(),
        }
    }
}

impl<H: Host> ElementHandle<H> {
    /// Wraps `node`, routing its accesses through `handler`.
    ///
    /// Any handle's handler can be used, see [`Intercept::handler`].
    pub fn wrap(handler: &Handler<H>, node: H::Node) -> Self {
        Self {
            handler: handler.clone(),
            root: node,
        }
    }

    /// Returns the host the element belongs to.
    pub fn host(&self) -> &H {
        self.handler.host()
    }

    /// Consumes the handle, returning the wrapped node.
    pub fn into_root(self) -> H::Node {
        self.root
    }
}

impl<H: Host> Intercept for ElementHandle<H> {
    type Host = H;

    fn handler(&self) -> &Handler<H> {
        &self.handler
    }

    fn root(&self) -> &H::Node {
        &self.root
    }

    fn property_mut(&mut self, _property: Property) -> Option<&mut H::Node> {
        None
    }
}

#[cfg(test)]
mod tests {
    use svgproxy_core::{attribute::Attributes, host::memory::MemoryDocument};

    use super::*;
    use crate::Session;

    #[test]
    fn test_root_is_read_only() {
        let session = Session::new(MemoryDocument::new(), Attributes::new()).unwrap();
        let mut circle = session.invoke("circle", Attributes::new()).unwrap();
        let node = *circle.root();

        circle.set("root", 5).unwrap();

        assert_eq!(*circle.root(), node);
        assert_eq!(circle.attribute("root").as_deref(), Some("5"));
        assert_eq!(circle.get("root").unwrap().into_node(), Some(node));
    }

    #[test]
    fn test_wrap_same_node_twice() {
        let session = Session::new(MemoryDocument::new(), Attributes::new()).unwrap();
        let rect = session.invoke("rect", Attributes::new()).unwrap();

        let mut alias = ElementHandle::wrap(rect.handler(), *rect.root());
        alias.set("fill", "navy").unwrap();

        assert_eq!(alias.root(), rect.root());
        assert_eq!(rect.attribute("fill").as_deref(), Some("navy"));
    }

    #[test]
    fn test_into_root() {
        let session = Session::new(MemoryDocument::new(), Attributes::new()).unwrap();
        let path = session.invoke("createPath", Attributes::new()).unwrap();
        let node = *path.root();

        assert_eq!(path.into_root(), node);
    }
}
