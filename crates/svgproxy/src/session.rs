//! The session root.
//!
//! A [`Session`] owns the top-level `<svg>` container of a drawing. Elements
//! created through a session's bare accessors are appended to that container,
//! and attribute writes on the session land on it.

use std::rc::Rc;

use log::debug;

use svgproxy_core::{attribute::Attributes, host::Host, kind::ElementKind};

use crate::{
    SvgProxyError,
    config::SessionConfig,
    handler::{Handler, Intercept, Property},
};

/// The root handle of a drawing.
///
/// # Examples
///
/// ```
/// use svgproxy::{Attributes, Intercept, Session, host::memory::MemoryDocument};
///
/// let session = Session::new(
///     MemoryDocument::new(),
///     Attributes::new().with("width", 200).with("height", 100),
/// )?;
///
/// let group = session.invoke("g", Attributes::new())?;
/// group.invoke("rect", Attributes::new().with("width", 20).with("height", 10))?;
///
/// let markup = session.host().render(*session.root()).unwrap();
/// assert!(markup.contains("<rect"));
/// # Ok::<(), svgproxy::SvgProxyError>(())
/// ```
#[derive(Debug)]
pub struct Session<H: Host> {
    handler: Handler<H>,
    root: H::Node,
}

impl<H: Host> Session<H> {
    /// Starts a session with the default configuration.
    ///
    /// Creates the `<svg>` container and applies `attributes` to it.
    ///
    /// # Errors
    ///
    /// Returns [`SvgProxyError::Host`] if the host rejects the container or
    /// one of its attributes.
    pub fn new(host: H, attributes: impl Into<Attributes>) -> Result<Self, SvgProxyError> {
        Self::with_config(host, SessionConfig::default(), attributes)
    }

    /// Starts a session with `config`.
    ///
    /// # Errors
    ///
    /// See [`Session::new`].
    pub fn with_config(
        host: H,
        config: SessionConfig,
        attributes: impl Into<Attributes>,
    ) -> Result<Self, SvgProxyError> {
        Self::from_shared(Rc::new(host), config, attributes)
    }

    /// Starts a session over a host that is also held elsewhere.
    ///
    /// Several sessions may share one host; each gets its own container.
    ///
    /// # Errors
    ///
    /// See [`Session::new`].
    pub fn from_shared(
        host: Rc<H>,
        config: SessionConfig,
        attributes: impl Into<Attributes>,
    ) -> Result<Self, SvgProxyError> {
        let attributes = attributes.into();
        let handler = Handler::new(host, config);
        let root = handler.create_node(ElementKind::Svg, &attributes)?;

        debug!(
            namespace = handler.config().namespace(),
            attributes_count = attributes.len();
            "Session started"
        );

        Ok(Self { handler, root })
    }

    /// Returns the host the session draws into.
    pub fn host(&self) -> &H {
        self.handler.host()
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        self.handler.config()
    }
}

impl<H: Host> Intercept for Session<H> {
    type Host = H;

    fn handler(&self) -> &Handler<H> {
        &self.handler
    }

    fn root(&self) -> &H::Node {
        &self.root
    }

    fn property_mut(&mut self, property: Property) -> Option<&mut H::Node> {
        match property {
            Property::Root => Some(&mut self.root),
        }
    }
}

#[cfg(test)]
mod tests {
    use svgproxy_core::{
        SVG_NAMESPACE,
        host::memory::{MemoryDocument, MemoryError},
    };

    use super::*;
    use crate::handler::Value;

    #[test]
    fn test_new_creates_container() {
        let session = Session::new(
            MemoryDocument::new(),
            Attributes::new().with("width", 300).with("viewBox", "0 0 30 20"),
        )
        .unwrap();

        let host = session.host();
        let root = *session.root();
        assert_eq!(host.len(), 1);
        assert_eq!(host.local_name(root).as_deref(), Some("svg"));
        assert_eq!(host.namespace(root).as_deref(), Some(SVG_NAMESPACE));
        assert_eq!(
            host.attributes(root),
            vec![
                ("width".to_string(), "300".to_string()),
                ("viewBox".to_string(), "0 0 30 20".to_string()),
            ]
        );
        assert_eq!(host.parent(root), None);
    }

    #[test]
    fn test_custom_namespace() {
        let config = SessionConfig::new().with_namespace("urn:example:graphics");
        let session = Session::with_config(MemoryDocument::new(), config, Attributes::new()).unwrap();
        let circle = session.invoke("circle", Attributes::new()).unwrap();

        assert_eq!(
            session.host().namespace(*circle.root()).as_deref(),
            Some("urn:example:graphics")
        );
    }

    #[test]
    fn test_container_rejected_by_host() {
        let config = SessionConfig::new().with_namespace("");
        let result = Session::with_config(MemoryDocument::new(), config, Attributes::new());

        let err = result.unwrap_err();
        let source = err
            .as_host_error()
            .and_then(|err| err.downcast_ref::<MemoryError>());
        assert_eq!(source, Some(&MemoryError::EmptyNamespace));
    }

    #[test]
    fn test_sessions_share_a_host() {
        let host = Rc::new(MemoryDocument::new());
        let first = Session::from_shared(Rc::clone(&host), SessionConfig::default(), Attributes::new()).unwrap();
        let second = Session::from_shared(Rc::clone(&host), SessionConfig::default(), Attributes::new()).unwrap();

        assert_ne!(first.root(), second.root());
        assert_eq!(host.len(), 2);
    }

    #[test]
    fn test_root_is_writable_on_session() {
        let mut session = Session::new(MemoryDocument::new(), Attributes::new()).unwrap();
        let original = *session.root();
        let replacement = session.create(ElementKind::Svg, Attributes::new()).unwrap();

        session.set("root", Value::Node(*replacement.root())).unwrap();
        session.invoke("rect", Attributes::new()).unwrap();

        assert_eq!(session.root(), replacement.root());
        assert!(session.host().children(original).is_empty());
        assert_eq!(session.host().children(*replacement.root()).len(), 1);
    }
}
