//! Attribute values and ordered attribute mappings.
//!
//! Attributes live in the host document; the types here only carry them to
//! the host. [`AttrValue`] is the string form a value takes when it is stored,
//! and [`Attributes`] is the mapping handed to creator calls.
//!
//! # Example
//!
//! ```
//! # use svgproxy_core::attribute::Attributes;
//! let attributes = Attributes::new()
//!     .with("cx", 10)
//!     .with("r", 2.5)
//!     .with("fill", "tomato");
//!
//! let pairs: Vec<_> = attributes.iter().collect();
//! assert_eq!(pairs, [("cx", "10"), ("r", "2.5"), ("fill", "tomato")]);
//! ```

use std::fmt;

use indexmap::IndexMap;

/// The string form of an attribute value.
///
/// Numbers use their shortest `Display` form, so `50.0_f64` is stored as
/// `"50"` and `0.5_f64` as `"0.5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttrValue(String);

impl AttrValue {
    /// Returns the stored string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AttrValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AttrValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AttrValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

macro_rules! attr_value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

attr_value_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// An ordered mapping from attribute name to value.
///
/// Iteration follows insertion order. Inserting an existing name replaces its
/// value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, builder style.
    ///
    /// # Example
    ///
    /// ```
    /// # use svgproxy_core::attribute::Attributes;
    /// let attributes = Attributes::new().with("width", 100).with("height", 40);
    /// assert_eq!(attributes.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an attribute, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value stored for `name`.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_numbers() {
        assert_eq!(AttrValue::from(50), "50");
        assert_eq!(AttrValue::from(50.0_f64), "50");
        assert_eq!(AttrValue::from(0.5_f32), "0.5");
        assert_eq!(AttrValue::from(-3_i64), "-3");
    }

    #[test]
    fn test_attr_value_other_scalars() {
        assert_eq!(AttrValue::from(true), "true");
        assert_eq!(AttrValue::from('x'), "x");
        assert_eq!(AttrValue::from(String::from("red")), "red");
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let attributes = Attributes::new().with("z", 1).with("a", 2).with("m", 3);
        let names: Vec<_> = attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_attributes_replace_in_place() {
        let mut attributes = Attributes::from([("x", 1), ("y", 2)]);
        let previous = attributes.insert("x", 9);

        assert_eq!(previous, Some(AttrValue::from(1)));
        let pairs: Vec<_> = attributes.iter().collect();
        assert_eq!(pairs, [("x", "9"), ("y", "2")]);
    }

    #[test]
    fn test_attributes_from_mixed_sources() {
        let mut attributes: Attributes = vec![("fill", "none")].into();
        attributes.extend([("stroke-width", 2)]);

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("stroke-width").map(AttrValue::as_str), Some("2"));
        assert!(Attributes::new().is_empty());
    }
}
