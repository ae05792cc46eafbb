//! The browser DOM as a [`Host`].
//!
//! Nodes are `web_sys::Element`s. Exceptions thrown by the DOM surface as
//! [`WebHostError`] carrying the thrown value's message.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::Host;

/// An exception thrown by a DOM call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("DOM exception: {0}")]
pub struct WebHostError(String);

impl WebHostError {
    /// Returns the message of the thrown value.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<JsValue> for WebHostError {
    fn from(value: JsValue) -> Self {
        Self(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// A browser document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Wraps an existing document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Returns the document of the current window.
    ///
    /// # Errors
    ///
    /// Fails outside a window context, e.g. in a worker.
    pub fn global() -> Result<Self, WebHostError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| WebHostError("no document in this context".to_string()))
    }

    /// Returns the wrapped document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for WebDocument {
    type Node = Element;
    type Error = WebHostError;

    fn create_element_ns(&self, namespace: &str, local_name: &str) -> Result<Element, WebHostError> {
        Ok(self.document.create_element_ns(Some(namespace), local_name)?)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), WebHostError> {
        Ok(node.set_attribute(name, value)?)
    }

    fn get_attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), WebHostError> {
        parent.append_child(child)?;
        Ok(())
    }
}
