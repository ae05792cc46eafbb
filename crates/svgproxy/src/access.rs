//! Accessor name parsing.
//!
//! An accessor is either `<kind>`, which creates an element and appends it to
//! the handle's node, or `create<Kind>`, which creates a detached element.

use svgproxy_core::kind::ElementKind;

use crate::config::KindNaming;

const CREATE_MARKER: &str = "create";

/// An accessor name that names an element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KindAccess {
    pub kind: ElementKind,
    /// Whether the created element is appended to the accessing handle's node.
    pub attach: bool,
}

/// Classifies `name` as an element-kind accessor.
///
/// A `create` prefix followed by a known kind yields a detached creation.
/// Otherwise the whole name is tried as a kind token.
pub(crate) fn parse_kind_access(name: &str, naming: KindNaming) -> Option<KindAccess> {
    let detached = name
        .strip_prefix(CREATE_MARKER)
        .filter(|token| !token.is_empty())
        .and_then(|token| naming.resolve(token))
        .map(|kind| KindAccess {
            kind,
            attach: false,
        });

    detached.or_else(|| naming.resolve(name).map(|kind| KindAccess { kind, attach: true }))
}
