//! The subtype segment of a media type.

use std::fmt;

/// A subtype part of a [`MediaType`](crate::MediaType), the part after the `/`.
///
/// A subtype may carry a structured syntax suffix after a `+`, as in
/// `svg+xml` (RFC 6838 §4.2.8).
///
/// # Examples
///
/// ```
/// use mediatype::SubType;
///
/// let sub = SubType::from("svg+xml");
/// assert_eq!(sub.base(), "svg");
/// assert_eq!(sub.suffix(), Some("xml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubType(String);

impl SubType {
    /// Creates a subtype from any string. No validation is performed.
    pub fn new(s: impl Into<String>) -> Self {
        SubType(s.into())
    }

    /// Returns the subtype as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the base subtype name, the part before the first `+`.
    ///
    /// Without a `+` this is the whole subtype.
    pub fn base(&self) -> &str {
        self.0.split_once('+').map_or(self.as_str(), |(base, _)| base)
    }

    /// Returns the structured syntax suffix, the part after the first `+`.
    ///
    /// Returns `None` when there is no `+`, or when nothing follows it
    /// (`svg+`).
    pub fn suffix(&self) -> Option<&str> {
        self.0
            .split_once('+')
            .map(|(_, suffix)| suffix)
            .filter(|suffix| !suffix.is_empty())
    }

    /// Consumes the subtype, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubType {
    fn from(s: &str) -> Self {
        SubType(s.to_string())
    }
}

impl From<String> for SubType {
    fn from(s: String) -> Self {
        SubType(s)
    }
}

impl From<SubType> for String {
    fn from(sub: SubType) -> Self {
        sub.0
    }
}

impl PartialEq<str> for SubType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SubType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl serde::Serialize for SubType {
    fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SubType {
    fn deserialize<D: serde::Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(de).map(SubType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base() {
        assert_eq!(SubType::from("plain").base(), "plain");
        assert_eq!(SubType::from("svg+xml").base(), "svg");
        assert_eq!(SubType::from("svg+").base(), "svg");
        assert_eq!(SubType::from("+json").base(), "");
        assert_eq!(SubType::from("a+b+c").base(), "a");
    }

    #[test]
    fn test_suffix() {
        assert_eq!(SubType::from("plain").suffix(), None);
        assert_eq!(SubType::from("svg+xml").suffix(), Some("xml"));
        assert_eq!(SubType::from("svg+").suffix(), None);
        assert_eq!(SubType::from("vnd.api+json").suffix(), Some("json"));
        // Only the first '+' splits; chains are not decomposed further.
        assert_eq!(SubType::from("a+b+c").suffix(), Some("b+c"));
    }

    #[test]
    fn test_conversions() {
        let sub = SubType::new(String::from("html"));
        assert_eq!(sub.as_str(), "html");
        assert_eq!(sub.to_string(), "html");
        assert_eq!(sub, "html");
        assert_eq!(String::from(sub.clone()), "html");
        assert_eq!(sub.into_string(), "html");
    }

        #[test]
    fn test_serde_plain_string() {
        let sub = SubType::from("svg+xml");
        assert_eq!(serde_json::to_string(&sub).unwrap(), "\"svg+xml\"");
        let back: SubType = serde_json::from_str("\"svg+xml\"").unwrap();
        assert_eq!(back, sub);
    }
}
