//! svgproxy Core Types and Definitions
//!
//! This crate provides the foundational pieces the svgproxy interception layer
//! is built on. It includes:
//!
//! - **Host**: The contract of the document object model svgproxy drives
//!   ([`host::Host`]), an in-memory implementation ([`host::memory`]) and,
//!   with the `web` feature, a browser implementation.
//! - **Kinds**: The registry of known SVG element kinds ([`kind::ElementKind`])
//! - **Attributes**: Attribute values and ordered attribute mappings
//!   ([`attribute`] module)

pub mod attribute;
pub mod host;
pub mod kind;

/// The XML namespace SVG elements are created in.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
