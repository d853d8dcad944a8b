//! Structured media types.
//!
//! A [`MediaType`] is an identifier of resource types as described in
//! RFC 2046: a top-level type, a [`SubType`] and a set of parameters.

use crate::error::{Error, Result};
use crate::format::render;
use crate::parser::parse_media_type;
use crate::subtype::SubType;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed media type such as `text/plain; charset=utf-8`.
///
/// Values only come out of parsing, so the type and subtype are always
/// non-empty lowercase tokens and parameter names are lowercase.
///
/// Equality compares the type and subtype only. Parameters are modifiers and
/// do not take part in identity; use [`MediaType::eq_strict`] to include them.
///
/// # Examples
///
/// ```
/// use mediatype::MediaType;
///
/// let plain: MediaType = "text/plain".parse().unwrap();
/// let utf8: MediaType = "text/plain;charset=utf-8".parse().unwrap();
/// assert_eq!(plain, utf8);
/// assert!(!plain.eq_strict(&utf8));
/// assert_eq!(utf8.parameter("charset"), Some("utf-8"));
/// ```
#[derive(Debug, Clone)]
pub struct MediaType {
    type_: String,
    subtype: SubType,
    parameters: HashMap<String, String>,
}

impl MediaType {
    /// Parses a string as a media type.
    pub fn parse(s: &str) -> Result<Self> {
        let (type_, subtype, parameters) = parse_media_type(s)?;
        Ok(MediaType {
            type_,
            subtype: SubType::from(subtype),
            parameters,
        })
    }

    /// The top-level type, the part before the `/`.
    ///
    /// refs. <https://datatracker.ietf.org/doc/html/rfc2046#section-2>
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// The subtype, the part after the `/`.
    pub fn subtype(&self) -> &SubType {
        &self.subtype
    }

    /// The `type/subtype` pair without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }

    /// Parameters keyed by lowercase name.
    ///
    /// refs. <https://datatracker.ietf.org/doc/html/rfc2046#section-1>
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    /// Looks up a parameter value; the name is matched case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Compares type, subtype and parameters.
    pub fn eq_strict(&self, other: &MediaType) -> bool {
        self == other && self.parameters == other.parameters
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.type_ == other.type_ && self.subtype == other.subtype
    }
}

impl Eq for MediaType {}

// Must agree with `PartialEq`, so parameters are left out.
impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_.hash(state);
        self.subtype.hash(state);
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.type_, self.subtype.as_str(), &self.parameters))
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MediaType::parse(s)
    }
}

impl TryFrom<&str> for MediaType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        MediaType::parse(s)
    }
}

impl TryFrom<String> for MediaType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        MediaType::parse(&s)
    }
}

mod serde_impl {
    use super::MediaType;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for MediaType {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            ser.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for MediaType {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            struct Vis;
            impl Visitor<'_> for Vis {
                type Value = MediaType;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "a media type string")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                    MediaType::parse(v).map_err(E::custom)
                }
            }
            de.deserialize_str(Vis)
        }
    }
}
