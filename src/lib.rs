//! Structured representations of media types and operations about them.
//!
//! Media types are also known as MIME types. This crate provides:
//! - Media type parsing and formatting (RFC 2045, RFC 2046, RFC 2231)
//! - [`MediaType`] values whose equality ignores parameters
//! - [`SubType`] decomposition into a base name and a structured syntax
//!   suffix (RFC 6838 §4.2.8)
//! - serde support that encodes a [`MediaType`] as its textual form
//!
//! ```
//! use mediatype::MediaType;
//!
//! let mt: MediaType = "image/svg+xml; charset=utf-8".parse().unwrap();
//! assert_eq!(mt.type_(), "image");
//! assert_eq!(mt.subtype().base(), "svg");
//! assert_eq!(mt.subtype().suffix(), Some("xml"));
//! assert_eq!(mt.to_string(), "image/svg+xml; charset=utf-8");
//! ```

pub mod error;
pub mod grammar;
pub mod format;
pub mod parser;
pub mod media_type;
pub mod subtype;

// Re-export commonly used types
pub use error::{Error, Result};
pub use format::format_media_type;
pub use parser::parse_media_type;
pub use media_type::MediaType;
pub use subtype::SubType;
