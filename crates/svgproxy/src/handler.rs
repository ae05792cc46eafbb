//! The interception handler.
//!
//! Every handle routes its reads and writes through one [`Handler`]:
//!
//! - A read of an element-kind accessor (`circle`, `createCircle`) yields a
//!   [`Creator`] for that kind.
//! - A read of an own property (`root`) yields the wrapped node.
//! - Any other read falls back to the host attribute of that name.
//! - A write to a writable own property assigns it. Every other write becomes
//!   a host attribute write, including `class` and, on elements, `root`.
//!
//! The [`Intercept`] trait exposes this routing on [`Session`] and
//! [`ElementHandle`] alike.
//!
//! [`Session`]: crate::Session

use std::rc::Rc;

use log::{debug, trace};

use svgproxy_core::{
    attribute::{AttrValue, Attributes},
    host::Host,
    kind::ElementKind,
};

use crate::{
    SvgProxyError,
    access::{KindAccess, parse_kind_access},
    config::{SessionConfig, UnknownNamePolicy},
    element::ElementHandle,
};

/// A real property of a handle, as opposed to a host attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// The host node a handle wraps.
    Root,
}

impl Property {
    /// Returns the name the property is accessed by.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
        }
    }

    /// Looks a property up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "root" => Some(Self::Root),
            _ => None,
        }
    }
}

/// A value written through [`Intercept::set`].
///
/// Attribute writes take the [`Value::Text`] form; assigning a property takes
/// a [`Value::Node`]. Scalars and strings convert into `Text` with `into()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<N> {
    Node(N),
    Text(AttrValue),
}

impl<N> From<AttrValue> for Value<N> {
    fn from(value: AttrValue) -> Self {
        Self::Text(value)
    }
}

macro_rules! value_from_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<N> From<$ty> for Value<N> {
                fn from(value: $ty) -> Self {
                    Self::Text(AttrValue::from(value))
                }
            }
        )*
    };
}

value_from_text!(
    &str, String, &String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64, bool, char,
);

/// The outcome of reading a name through [`Intercept::get`].
#[derive(Debug)]
pub enum Resolved<H: Host> {
    /// The name is an element-kind accessor.
    Creator(Creator<H>),
    /// The name is an own property; holds its current value.
    Property(H::Node),
    /// The name is an attribute; holds its value if the node carries it.
    Attribute(Option<String>),
}

impl<H: Host> Resolved<H> {
    pub fn is_creator(&self) -> bool {
        matches!(self, Self::Creator(_))
    }

    pub fn into_creator(self) -> Option<Creator<H>> {
        match self {
            Self::Creator(creator) => Some(creator),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<H::Node> {
        match self {
            Self::Property(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the attribute value, or `None` for creators, properties and
    /// absent attributes alike.
    pub fn into_attribute(self) -> Option<String> {
        match self {
            Self::Attribute(value) => value,
            _ => None,
        }
    }
}

/// Creates elements of one kind under one parent node.
///
/// Obtained by reading an element-kind accessor. A creator from a bare
/// accessor (`circle`) appends every element it creates to the node of the
/// handle it was read from; one from a `create` accessor (`createCircle`)
/// leaves them detached.
#[derive(Debug)]
pub struct Creator<H: Host> {
    handler: Handler<H>,
    parent: H::Node,
    access: KindAccess,
}

impl<H: Host> Clone for Creator<H> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            parent: self.parent.clone(),
            access: self.access,
        }
    }
}

impl<H: Host> Creator<H> {
    /// Returns the kind of element this creator makes.
    pub fn kind(&self) -> ElementKind {
        self.access.kind
    }

    /// Returns `true` if created elements are appended to the parent node.
    pub fn attaches(&self) -> bool {
        self.access.attach
    }

    /// Creates an element with `attributes` and wraps it in a handle.
    ///
    /// # Errors
    ///
    /// Returns [`SvgProxyError::Host`] if the host rejects the element, one of
    /// the attributes or the append.
    pub fn call(&self, attributes: impl Into<Attributes>) -> Result<ElementHandle<H>, SvgProxyError> {
        self.handler
            .spawn(&self.parent, self.access, &attributes.into())
    }
}

/// The routing policy shared by every handle of a session.
///
/// Cloning a handler is cheap; clones share the host and the configuration.
#[derive(Debug)]
pub struct Handler<H: Host> {
    host: Rc<H>,
    config: Rc<SessionConfig>,
}

impl<H: Host> Clone for Handler<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            config: Rc::clone(&self.config),
        }
    }
}

impl<H: Host> Handler<H> {
    pub(crate) fn new(host: Rc<H>, config: SessionConfig) -> Self {
        Self {
            host,
            config: Rc::new(config),
        }
    }

    /// Returns the host this handler drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn get<T>(&self, target: &T, name: &str) -> Result<Resolved<H>, SvgProxyError>
    where
        T: Intercept<Host = H> + ?Sized,
    {
        if let Some(access) = parse_kind_access(name, self.config.kind_names()) {
            trace!(
                name = name,
                kind = access.kind.tag_name(),
                attach = access.attach;
                "Resolved element accessor"
            );
            return Ok(Resolved::Creator(Creator {
                handler: self.clone(),
                parent: target.root().clone(),
                access,
            }));
        }

        if let Some(property) = Property::from_name(name) {
            return Ok(match property {
                Property::Root => Resolved::Property(target.root().clone()),
            });
        }

        let value = self.host.get_attribute(target.root(), name);
        trace!(name = name, present = value.is_some(); "Read attribute");

        match (value, self.config.unknown_names()) {
            (None, UnknownNamePolicy::Strict) => Err(SvgProxyError::UnknownElementKind {
                name: name.to_string(),
            }),
            (value, _) => Ok(Resolved::Attribute(value)),
        }
    }

    fn set<T>(&self, target: &mut T, name: &str, value: Value<H::Node>) -> Result<(), SvgProxyError>
    where
        T: Intercept<Host = H> + ?Sized,
    {
        if let Some(property) = Property::from_name(name) {
            if let Some(slot) = target.property_mut(property) {
                return match value {
                    Value::Node(node) => {
                        trace!(property = property.name(); "Assigned property");
                        *slot = node;
                        Ok(())
                    }
                    Value::Text(_) => Err(SvgProxyError::PropertyType {
                        name: name.to_string(),
                    }),
                };
            }
        }

        match value {
            Value::Text(text) => {
                trace!(name = name, value = text.as_str(); "Write attribute");
                self.host
                    .set_attribute(target.root(), name, text.as_str())
                    .map_err(SvgProxyError::host)
            }
            Value::Node(_) => Err(SvgProxyError::NodeAttribute {
                name: name.to_string(),
            }),
        }
    }

    /// Creates a node of `kind` carrying `attributes`, optionally appends it to
    /// `parent`, and wraps it.
    fn spawn(
        &self,
        parent: &H::Node,
        access: KindAccess,
        attributes: &Attributes,
    ) -> Result<ElementHandle<H>, SvgProxyError> {
        let node = self.create_node(access.kind, attributes)?;
        if access.attach {
            self.host
                .append_child(parent, &node)
                .map_err(SvgProxyError::host)?;
        }

        debug!(
            kind = access.kind.tag_name(),
            attach = access.attach,
            attributes_count = attributes.len();
            "Created element"
        );
        Ok(ElementHandle::wrap(self, node))
    }

    pub(crate) fn create_node(
        &self,
        kind: ElementKind,
        attributes: &Attributes,
    ) -> Result<H::Node, SvgProxyError> {
        let local_name = self.config.kind_names().local_name(kind);
        let node = self
            .host
            .create_element_ns(self.config.namespace(), &local_name)
            .map_err(SvgProxyError::host)?;

        for (name, value) in attributes {
            self.host
                .set_attribute(&node, name, value)
                .map_err(SvgProxyError::host)?;
        }

        Ok(node)
    }
}

/// The capability set of a handle.
///
/// Implementors provide access to their [`Handler`], their node and their
/// writable properties; every other method routes through the handler.
///
/// # Example
///
/// ```
/// use svgproxy::{Attributes, Intercept, Session, host::memory::MemoryDocument};
///
/// let session = Session::new(MemoryDocument::new(), Attributes::new())?;
///
/// let mut circle = session.invoke("circle", Attributes::new().with("cx", 10))?;
/// circle.set("r", 50)?;
/// circle.set("class", "dot")?;
///
/// assert_eq!(circle.attribute("r").as_deref(), Some("50"));
/// assert_eq!(session.host().parent(*circle.root()), Some(*session.root()));
/// # Ok::<(), svgproxy::SvgProxyError>(())
/// ```
pub trait Intercept {
    /// The host the handle's node belongs to.
    type Host: Host;

    /// Returns the handler routing this handle's accesses.
    fn handler(&self) -> &Handler<Self::Host>;

    /// Returns the node this handle wraps.
    ///
    /// Created elements are appended to it, attributes are read from and
    /// written to it.
    fn root(&self) -> &<Self::Host as Host>::Node;

    /// Returns the slot of `property` if it is writable on this handle.
    fn property_mut(&mut self, property: Property) -> Option<&mut <Self::Host as Host>::Node>;

    /// Reads `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SvgProxyError::UnknownElementKind`] for an unknown name under
    /// [`UnknownNamePolicy::Strict`].
    fn get(&self, name: &str) -> Result<Resolved<Self::Host>, SvgProxyError> {
        self.handler().get(self, name)
    }

    /// Writes `value` to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SvgProxyError::PropertyType`] if a writable property is given
    /// text, [`SvgProxyError::NodeAttribute`] if an attribute is given a node,
    /// and [`SvgProxyError::Host`] if the host rejects the attribute.
    fn set(
        &mut self,
        name: &str,
        value: impl Into<Value<<Self::Host as Host>::Node>>,
    ) -> Result<(), SvgProxyError> {
        let handler = self.handler().clone();
        handler.set(self, name, value.into())
    }

    /// Reads `name` and calls the resulting creator with `attributes`.
    ///
    /// `invoke("circle", …)` is the call form of the `circle` accessor.
    ///
    /// # Errors
    ///
    /// Returns [`SvgProxyError::NotCallable`] if `name` is not an element-kind
    /// accessor, and otherwise the errors of [`Intercept::get`] and
    /// [`Creator::call`].
    fn invoke(
        &self,
        name: &str,
        attributes: impl Into<Attributes>,
    ) -> Result<ElementHandle<Self::Host>, SvgProxyError> {
        match self.get(name)? {
            Resolved::Creator(creator) => creator.call(attributes),
            _ => Err(SvgProxyError::NotCallable {
                name: name.to_string(),
            }),
        }
    }

    /// Creates a detached element of `kind`, like `create<Kind>()`.
    fn create(
        &self,
        kind: ElementKind,
        attributes: impl Into<Attributes>,
    ) -> Result<ElementHandle<Self::Host>, SvgProxyError> {
        let access = KindAccess {
            kind,
            attach: false,
        };
        self.handler()
            .spawn(self.root(), access, &attributes.into())
    }

    /// Creates an element of `kind` and appends it to this handle's node,
    /// like `<kind>()`.
    fn append(
        &self,
        kind: ElementKind,
        attributes: impl Into<Attributes>,
    ) -> Result<ElementHandle<Self::Host>, SvgProxyError> {
        let access = KindAccess { kind, attach: true };
        self.handler()
            .spawn(self.root(), access, &attributes.into())
    }

    /// Returns the value of attribute `name` of this handle's node.
    fn attribute(&self, name: &str) -> Option<String> {
        self.handler().host().get_attribute(self.root(), name)
    }
}

#[cfg(test)]
mod tests {
    use svgproxy_core::host::memory::{MemoryDocument, MemoryError};

    use super::*;
    use crate::{Session, config::KindNaming};

    fn session() -> Session<MemoryDocument> {
        Session::new(MemoryDocument::new(), Attributes::new()).unwrap()
    }

    #[test]
    fn test_get_kind_returns_creator() {
        let session = session();

        let creator = session.get("rect").unwrap().into_creator().unwrap();
        assert_eq!(creator.kind(), ElementKind::Rect);
        assert!(creator.attaches());

        let creator = session.get("createRect").unwrap().into_creator().unwrap();
        assert_eq!(creator.kind(), ElementKind::Rect);
        assert!(!creator.attaches());
    }

    #[test]
    fn test_created_elements_take_lower_cased_token() {
        let session = session();

        let gradient = session
            .get("linearGradient")
            .unwrap()
            .into_creator()
            .unwrap()
            .call(Attributes::new())
            .unwrap();
        let blend = session
            .get("createFEBlend")
            .unwrap()
            .into_creator()
            .unwrap()
            .call(Attributes::new())
            .unwrap();

        let host = session.host();
        assert_eq!(host.local_name(*gradient.root()).as_deref(), Some("lineargradient"));
        assert_eq!(host.local_name(*blend.root()).as_deref(), Some("feblend"));
    }

    #[test]
    fn test_irregular_tags_are_not_creators() {
        let session = session();

        for name in ["svg", "tspan", "feBlend", "mpath"] {
            let resolved = session.get(name).unwrap();
            assert!(
                matches!(resolved, Resolved::Attribute(None)),
                "`{name}` should read as an absent attribute"
            );
        }
    }

    #[test]
    fn test_canonical_naming_keeps_camel_case_tags() {
        let config = SessionConfig::new().with_kind_names(KindNaming::Canonical);
        let session = Session::with_config(MemoryDocument::new(), config, Attributes::new()).unwrap();

        let gradient = session.invoke("linearGradient", Attributes::new()).unwrap();
        let span = session.invoke("tspan", Attributes::new()).unwrap();
        let nested = session.invoke("createSvg", Attributes::new()).unwrap();

        let host = session.host();
        assert_eq!(host.local_name(*gradient.root()).as_deref(), Some("linearGradient"));
        assert_eq!(host.local_name(*span.root()).as_deref(), Some("tspan"));
        assert_eq!(host.local_name(*nested.root()).as_deref(), Some("svg"));
        assert_eq!(host.parent(*nested.root()), None);
    }

    #[test]
    fn test_reading_creator_has_no_side_effect() {
        let session = session();
        let before = session.host().len();

        let _ = session.get("circle").unwrap();

        assert_eq!(session.host().len(), before);
    }

    #[test]
    fn test_creator_can_be_called_repeatedly() {
        let session = session();
        let creator = session.get("line").unwrap().into_creator().unwrap();

        let first = creator.call(Attributes::new()).unwrap();
        let second = creator.call([("x1", 3)]).unwrap();

        assert_eq!(
            session.host().children(*session.root()),
            vec![*first.root(), *second.root()]
        );
        assert_eq!(second.attribute("x1").as_deref(), Some("3"));
    }

    #[test]
    fn test_get_root_property() {
        let session = session();
        let node = session.get("root").unwrap().into_node();
        assert_eq!(node, Some(*session.root()));
    }

    #[test]
    fn test_get_falls_back_to_attribute() {
        let mut session = session();
        session.set("width", 120).unwrap();

        let resolved = session.get("width").unwrap();
        assert!(!resolved.is_creator());
        assert_eq!(resolved.into_attribute().as_deref(), Some("120"));
        assert_eq!(session.get("height").unwrap().into_attribute(), None);
    }

    #[test]
    fn test_set_writable_property_requires_node() {
        let mut session = session();
        let result = session.set("root", "elsewhere");
        assert!(matches!(
            result,
            Err(SvgProxyError::PropertyType { ref name }) if name == "root"
        ));
    }

    #[test]
    fn test_set_attribute_rejects_node() {
        let mut session = session();
        let node = *session.root();
        let result = session.set("fill", Value::Node(node));
        assert!(matches!(
            result,
            Err(SvgProxyError::NodeAttribute { ref name }) if name == "fill"
        ));
    }

    #[test]
    fn test_host_errors_propagate() {
        let mut session = session();
        let err = session.set("not valid", 1).unwrap_err();

        let source = err
            .as_host_error()
            .and_then(|err| err.downcast_ref::<MemoryError>());
        assert_eq!(source, Some(&MemoryError::InvalidName("not valid".to_string())));
    }

    #[test]
    fn test_creator_stops_at_first_host_error() {
        let session = session();
        let before = session.host().len();

        let result = session.invoke("circle", Attributes::new().with("r", 1).with("bad name", 2));

        assert!(matches!(result, Err(SvgProxyError::Host(_))));
        // The node was created but never attached
        assert_eq!(session.host().len(), before + 1);
        assert!(session.host().children(*session.root()).is_empty());
    }

    #[test]
    fn test_invoke_non_kind_is_not_callable() {
        let session = session();
        let result = session.invoke("root", Attributes::new());
        assert!(matches!(
            result,
            Err(SvgProxyError::NotCallable { ref name }) if name == "root"
        ));
    }

    #[test]
    fn test_property_names() {
        assert_eq!(Property::from_name("root"), Some(Property::Root));
        assert_eq!(Property::Root.name(), "root");
        assert_eq!(Property::from_name("class"), None);
    }
}
