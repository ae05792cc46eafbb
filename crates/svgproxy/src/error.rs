//! Error types for svgproxy operations.
//!
//! This module provides the main error type [`SvgProxyError`]. Host failures
//! are carried unchanged as the error source; the remaining variants describe
//! misuse of a handle.

use std::io;

use thiserror::Error;

/// The main error type for svgproxy operations.
#[derive(Debug, Error)]
pub enum SvgProxyError {
    #[error("Host error: {0}")]
    Host(#[source] Box<dyn std::error::Error>),

    #[error("Unknown element kind: `{name}` is neither an element kind, a property nor an attribute")]
    UnknownElementKind { name: String },

    #[error("`{name}` does not name an element kind and cannot be called")]
    NotCallable { name: String },

    #[error("Property `{name}` only accepts a node")]
    PropertyType { name: String },

    #[error("A node cannot be stored in attribute `{name}`")]
    NodeAttribute { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SvgProxyError {
    /// Wraps an error reported by the host.
    pub fn host(err: impl std::error::Error + 'static) -> Self {
        Self::Host(Box::new(err))
    }

    /// Returns the host error, if this error came from the host.
    pub fn as_host_error(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Host(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
