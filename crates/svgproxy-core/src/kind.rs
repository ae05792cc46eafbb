//! The registry of known SVG element kinds.
//!
//! Every kind carries two names: its canonical tag name (`linearGradient`) and
//! the name of its DOM interface (`SVGLinearGradientElement`). Accessor tokens
//! are validated against the interface name, see [`ElementKind::resolve`];
//! [`ElementKind::resolve_tag`] matches tag names instead.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when parsing an [`ElementKind`] from an unknown tag name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown SVG element kind `{0}`")]
pub struct UnknownKind(pub String);

macro_rules! element_kinds {
    ($($variant:ident => $tag:literal, $interface:literal;)*) => {
        /// A known SVG element kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ElementKind {
            $($variant,)*
        }

        impl ElementKind {
            const ALL: &'static [ElementKind] = &[$(ElementKind::$variant,)*];

            /// Returns the tag name elements of this kind are created with.
            pub fn tag_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)*
                }
            }

            /// Returns the name of the DOM interface of this kind.
            pub fn interface_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $interface,)*
                }
            }
        }
    };
}

element_kinds! {
    A => "a", "SVGAElement";
    Animate => "animate", "SVGAnimateElement";
    AnimateMotion => "animateMotion", "SVGAnimateMotionElement";
    AnimateTransform => "animateTransform", "SVGAnimateTransformElement";
    Circle => "circle", "SVGCircleElement";
    ClipPath => "clipPath", "SVGClipPathElement";
    Defs => "defs", "SVGDefsElement";
    Desc => "desc", "SVGDescElement";
    Ellipse => "ellipse", "SVGEllipseElement";
    FeBlend => "feBlend", "SVGFEBlendElement";
    FeColorMatrix => "feColorMatrix", "SVGFEColorMatrixElement";
    FeComponentTransfer => "feComponentTransfer", "SVGFEComponentTransferElement";
    FeComposite => "feComposite", "SVGFECompositeElement";
    FeConvolveMatrix => "feConvolveMatrix", "SVGFEConvolveMatrixElement";
    FeDiffuseLighting => "feDiffuseLighting", "SVGFEDiffuseLightingElement";
    FeDisplacementMap => "feDisplacementMap", "SVGFEDisplacementMapElement";
    FeDistantLight => "feDistantLight", "SVGFEDistantLightElement";
    FeDropShadow => "feDropShadow", "SVGFEDropShadowElement";
    FeFlood => "feFlood", "SVGFEFloodElement";
    FeFuncA => "feFuncA", "SVGFEFuncAElement";
    FeFuncB => "feFuncB", "SVGFEFuncBElement";
    FeFuncG => "feFuncG", "SVGFEFuncGElement";
    FeFuncR => "feFuncR", "SVGFEFuncRElement";
    FeGaussianBlur => "feGaussianBlur", "SVGFEGaussianBlurElement";
    FeImage => "feImage", "SVGFEImageElement";
    FeMerge => "feMerge", "SVGFEMergeElement";
    FeMergeNode => "feMergeNode", "SVGFEMergeNodeElement";
    FeMorphology => "feMorphology", "SVGFEMorphologyElement";
    FeOffset => "feOffset", "SVGFEOffsetElement";
    FePointLight => "fePointLight", "SVGFEPointLightElement";
    FeSpecularLighting => "feSpecularLighting", "SVGFESpecularLightingElement";
    FeSpotLight => "feSpotLight", "SVGFESpotLightElement";
    FeTile => "feTile", "SVGFETileElement";
    FeTurbulence => "feTurbulence", "SVGFETurbulenceElement";
    Filter => "filter", "SVGFilterElement";
    ForeignObject => "foreignObject", "SVGForeignObjectElement";
    G => "g", "SVGGElement";
    Image => "image", "SVGImageElement";
    Line => "line", "SVGLineElement";
    LinearGradient => "linearGradient", "SVGLinearGradientElement";
    Marker => "marker", "SVGMarkerElement";
    Mask => "mask", "SVGMaskElement";
    Metadata => "metadata", "SVGMetadataElement";
    MPath => "mpath", "SVGMPathElement";
    Path => "path", "SVGPathElement";
    Pattern => "pattern", "SVGPatternElement";
    Polygon => "polygon", "SVGPolygonElement";
    Polyline => "polyline", "SVGPolylineElement";
    RadialGradient => "radialGradient", "SVGRadialGradientElement";
    Rect => "rect", "SVGRectElement";
    Script => "script", "SVGScriptElement";
    Set => "set", "SVGSetElement";
    Stop => "stop", "SVGStopElement";
    Style => "style", "SVGStyleElement";
    Svg => "svg", "SVGSVGElement";
    Switch => "switch", "SVGSwitchElement";
    Symbol => "symbol", "SVGSymbolElement";
    Text => "text", "SVGTextElement";
    TextPath => "textPath", "SVGTextPathElement";
    Title => "title", "SVGTitleElement";
    TSpan => "tspan", "SVGTSpanElement";
    Use => "use", "SVGUseElement";
    View => "view", "SVGViewElement";
}

impl ElementKind {
    /// Returns every known kind, alphabetically by tag name.
    pub fn all() -> &'static [ElementKind] {
        Self::ALL
    }

    /// Resolves an accessor token to a kind.
    ///
    /// A token names a kind only when `SVG<Token>Element`, with the token's
    /// first character upper-cased, is the kind's interface name. The rest of
    /// the token is compared case-sensitively, so tokens of kinds with
    /// irregular interface names (`SVGSVGElement`, `SVGTSpanElement`) must
    /// follow the interface spelling.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgproxy_core::kind::ElementKind;
    ///
    /// assert_eq!(ElementKind::resolve("circle"), Some(ElementKind::Circle));
    /// assert_eq!(ElementKind::resolve("Circle"), Some(ElementKind::Circle));
    /// assert_eq!(ElementKind::resolve("linearGradient"), Some(ElementKind::LinearGradient));
    /// assert_eq!(ElementKind::resolve("tSpan"), Some(ElementKind::TSpan));
    /// assert_eq!(ElementKind::resolve("tspan"), None);
    /// assert_eq!(ElementKind::resolve("svg"), None);
    /// assert_eq!(ElementKind::resolve("CIRCLE"), None);
    /// ```
    pub fn resolve(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let first = chars.next()?;

        Self::from_interface_name(&format!("SVG{}{}Element", first.to_uppercase(), chars.as_str()))
    }

    /// Resolves a token against tag names.
    ///
    /// The token with its first character lower-cased must equal the kind's
    /// tag name, so `svg`, `tspan` and `FeBlend` all resolve.
    pub fn resolve_tag(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let first = chars.next()?;
        let tag = format!("{}{}", first.to_lowercase(), chars.as_str());

        Self::ALL.iter().copied().find(|kind| kind.tag_name() == tag)
    }

    /// Looks a kind up by its DOM interface name.
    pub fn from_interface_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.interface_name() == name)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

impl FromStr for ElementKind {
    type Err = UnknownKind;

    /// Parses an exact tag name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag_name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
