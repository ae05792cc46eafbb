//! An in-process [`Host`] backed by an arena of nodes.
//!
//! [`MemoryDocument`] follows the DOM rules svgproxy relies on: element and
//! attribute names must be XML names, the namespace must not be empty,
//! appending a node that already has a parent moves it, and a node can never
//! become its own ancestor.
//!
//! # Example
//!
//! ```
//! # use svgproxy_core::{SVG_NAMESPACE, host::{Host, memory::MemoryDocument}};
//! let document = MemoryDocument::new();
//! let group = document.create_element_ns(SVG_NAMESPACE, "g").unwrap();
//! let circle = document.create_element_ns(SVG_NAMESPACE, "circle").unwrap();
//!
//! document.set_attribute(&circle, "r", "4").unwrap();
//! document.append_child(&group, &circle).unwrap();
//!
//! assert_eq!(document.parent(circle), Some(group));
//! assert_eq!(document.get_attribute(&circle, "r").as_deref(), Some("4"));
//! ```

use std::{cell::RefCell, fmt};

use indexmap::IndexMap;
use log::trace;
use svg::{Node as _, node::element::Element};
use thiserror::Error;

use super::Host;

/// A reference to a node of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors reported by a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("Namespace error: elements cannot be created in an empty namespace")]
    EmptyNamespace,

    #[error("Invalid character error: `{0}` is not a valid XML name")]
    InvalidName(String),

    #[error("Not found error: node {0} does not belong to this document")]
    UnknownNode(NodeId),

    #[error("Hierarchy request error: node {child} cannot be appended to {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

#[derive(Debug, Clone)]
struct NodeData {
    namespace: String,
    local_name: String,
    attributes: IndexMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory SVG document tree.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<NodeData>>,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes created in this document.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Returns `true` if no node has been created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Returns the local name of `node`.
    pub fn local_name(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |data| data.local_name.clone())
    }

    /// Returns the namespace `node` was created in.
    pub fn namespace(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |data| data.namespace.clone())
    }

    /// Returns the value of attribute `name` of `node`.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.with_node(node, |data| data.attributes.get(name).cloned())
            .flatten()
    }

    /// Returns all attributes of `node` in the order they were first set.
    pub fn attributes(&self, node: NodeId) -> Vec<(String, String)> {
        self.with_node(node, |data| {
            data.attributes
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
    }

    /// Returns the parent of `node`, or `None` for detached nodes.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.with_node(node, |data| data.parent).flatten()
    }

    /// Returns the children of `node` in document order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.with_node(node, |data| data.children.clone())
            .unwrap_or_default()
    }

    /// Renders the subtree rooted at `node` as SVG markup.
    ///
    /// The snapshot carries an `xmlns` declaration on its outermost element
    /// unless that element already has one.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::UnknownNode`] if `node` is not part of this document.
    pub fn render(&self, node: NodeId) -> Result<String, MemoryError> {
        let nodes = self.nodes.borrow();
        let data = nodes.get(node.0).ok_or(MemoryError::UnknownNode(node))?;

        let mut element = Self::build_element(&nodes, data);
        if !data.namespace.is_empty() && !data.attributes.contains_key("xmlns") {
            element.assign("xmlns", data.namespace.as_str());
        }

        Ok(element.to_string())
    }

    fn build_element(nodes: &[NodeData], data: &NodeData) -> Element {
        let mut element = Element::new(data.local_name.as_str());
        for (name, value) in &data.attributes {
            element.assign(name.as_str(), value.as_str());
        }
        for child in &data.children {
            let child = Self::build_element(nodes, &nodes[child.0]);
            element.append(child);
        }
        element
    }

    fn with_node<T>(&self, node: NodeId, f: impl FnOnce(&NodeData) -> T) -> Option<T> {
        self.nodes.borrow().get(node.0).map(f)
    }

    fn check_node(&self, node: NodeId) -> Result<(), MemoryError> {
        if node.0 < self.nodes.borrow().len() {
            Ok(())
        } else {
            Err(MemoryError::UnknownNode(node))
        }
    }
}

impl Host for MemoryDocument {
    type Node = NodeId;
    type Error = MemoryError;

    fn create_element_ns(&self, namespace: &str, local_name: &str) -> Result<NodeId, MemoryError> {
        if namespace.is_empty() {
            return Err(MemoryError::EmptyNamespace);
        }
        if !is_xml_name(local_name) {
            return Err(MemoryError::InvalidName(local_name.to_string()));
        }

        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData {
            namespace: namespace.to_string(),
            local_name: local_name.to_string(),
            attributes: IndexMap::new(),
            parent: None,
            children: Vec::new(),
        });

        trace!(node:% = id, local_name = local_name; "Created node");
        Ok(id)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), MemoryError> {
        if !is_xml_name(name) {
            return Err(MemoryError::InvalidName(name.to_string()));
        }

        let mut nodes = self.nodes.borrow_mut();
        let data = nodes
            .get_mut(node.0)
            .ok_or(MemoryError::UnknownNode(*node))?;
        data.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn get_attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.attribute(*node, name)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), MemoryError> {
        let (parent, child) = (*parent, *child);
        self.check_node(parent)?;
        self.check_node(child)?;

        // `child` must not be `parent` or one of its ancestors
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(MemoryError::HierarchyRequest { parent, child });
            }
            cursor = self.parent(current);
        }

        let mut nodes = self.nodes.borrow_mut();
        if let Some(previous) = nodes[child.0].parent.take() {
            nodes[previous.0].children.retain(|&id| id != child);
        }
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);

        trace!(parent:% = parent, child:% = child; "Appended node");
        Ok(())
    }
}

/// Checks `name` against a simplified XML `Name` production.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let is_start = |c: char| c.is_alphabetic() || c == '_' || c == ':';
    is_start(first) && chars.all(|c| is_start(c) || c.is_alphanumeric() || matches!(c, '-' | '.'))
}
