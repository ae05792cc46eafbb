//! Configuration types for svgproxy sessions.
//!
//! [`SessionConfig`] implements [`serde::Deserialize`] so it can be loaded from
//! TOML. Every field has a default, so an empty document is a valid
//! configuration.
//!
//! # Example
//!
//! ```
//! # use svgproxy::config::{SessionConfig, UnknownNamePolicy};
//! let config = SessionConfig::from_toml_str(r#"unknown_names = "strict""#).unwrap();
//! assert_eq!(config.unknown_names(), UnknownNamePolicy::Strict);
//! assert_eq!(config.namespace(), "http://www.w3.org/2000/svg");
//! ```

use std::{borrow::Cow, fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use svgproxy_core::{SVG_NAMESPACE, kind::ElementKind};

use crate::SvgProxyError;

/// How a read of a name that is neither an element kind nor a property is
/// answered when the node has no attribute of that name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownNamePolicy {
    /// Answer with an absent attribute value.
    #[default]
    Lenient,
    /// Fail with [`SvgProxyError::UnknownElementKind`].
    Strict,
}

/// How accessor tokens name element kinds, and the local name created
/// elements get.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindNaming {
    /// Tokens must follow the DOM interface spelling (`linearGradient`,
    /// `tSpan`, `SVG`) and elements are created with the lower-cased token
    /// (`lineargradient`).
    #[default]
    Interface,
    /// Tag names (`svg`, `tspan`, `feBlend`) are accepted as tokens as well,
    /// and elements are created with the canonical tag (`linearGradient`).
    Canonical,
}

impl KindNaming {
    /// Resolves an accessor token to a kind.
    pub fn resolve(self, token: &str) -> Option<ElementKind> {
        match self {
            Self::Interface => ElementKind::resolve(token),
            Self::Canonical => {
                ElementKind::resolve(token).or_else(|| ElementKind::resolve_tag(token))
            }
        }
    }

    /// Returns the local name elements of `kind` are created with.
    ///
    /// Every token resolving to `kind` lower-cases to the same name, so the
    /// name depends on the kind alone.
    pub fn local_name(self, kind: ElementKind) -> Cow<'static, str> {
        match self {
            Self::Interface => Cow::Owned(kind.tag_name().to_lowercase()),
            Self::Canonical => Cow::Borrowed(kind.tag_name()),
        }
    }
}

/// Settings shared by a session and every handle created from it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Namespace elements are created in.
    #[serde(default = "default_namespace")]
    namespace: String,

    /// Policy for reads of unknown names.
    #[serde(default)]
    unknown_names: UnknownNamePolicy,

    /// Token matching and local names of created elements.
    #[serde(default)]
    kind_names: KindNaming,
}

fn default_namespace() -> String {
    SVG_NAMESPACE.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            unknown_names: UnknownNamePolicy::default(),
            kind_names: KindNaming::default(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace elements are created in.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the policy for reads of unknown names.
    pub fn with_unknown_names(mut self, policy: UnknownNamePolicy) -> Self {
        self.unknown_names = policy;
        self
    }

    /// Sets how accessor tokens name element kinds.
    pub fn with_kind_names(mut self, naming: KindNaming) -> Self {
        self.kind_names = naming;
        self
    }

    /// Returns the namespace elements are created in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the policy for reads of unknown names.
    pub fn unknown_names(&self) -> UnknownNamePolicy {
        self.unknown_names
    }

    /// Returns how accessor tokens name element kinds.
    pub fn kind_names(&self) -> KindNaming {
        self.kind_names
    }

    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SvgProxyError::Config`] if the TOML is malformed or contains
    /// values of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, SvgProxyError> {
        toml::from_str(content)
            .map_err(|err| SvgProxyError::Config(format!("Failed to parse TOML configuration: {err}")))
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SvgProxyError::Io`] if the file cannot be read and
    /// [`SvgProxyError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SvgProxyError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading session configuration");

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        debug!(config:?; "Session configuration loaded");
        Ok(config)
    }
}
