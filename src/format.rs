//! Media type formatting.
//!
//! Serializes media types as RFC 2045 header values, falling back to RFC 2231
//! extended values for parameters that are not printable ASCII.

use crate::error::{Error, Result};
use crate::grammar::{is_token, is_tspecial};
use std::collections::HashMap;

const UPPER_HEX: &[u8] = b"0123456789ABCDEF";

/// Serializes a media type and parameters as a media type conforming to RFC 2045 and RFC 2616.
///
/// `t` is the `type/subtype` pair. The type and parameter names are written in
/// lower-case and parameters are sorted by name.
///
/// # Examples
///
/// ```
/// use mediatype::format_media_type;
/// use std::collections::HashMap;
///
/// let mut params = HashMap::new();
/// params.insert("charset".to_string(), "utf-8".to_string());
/// let formatted = format_media_type("text/html", &params).unwrap();
/// assert_eq!(formatted, "text/html; charset=utf-8");
/// ```
pub fn format_media_type(t: &str, params: &HashMap<String, String>) -> Result<String> {
    let Some((major, sub)) = t.split_once('/') else {
        return Err(Error::media_type(format!("{:?} has no slash", t)));
    };
    if !is_token(major) || !is_token(sub) {
        return Err(Error::media_type(format!("{:?} is not a type/subtype pair", t)));
    }
    if let Some(key) = params.keys().find(|key| !is_token(key)) {
        return Err(Error::parameter(format!("invalid parameter name {:?}", key)));
    }

    Ok(render(major, sub, params))
}

/// Renders already-validated parts. Used by `MediaType`'s `Display`.
pub(crate) fn render(major: &str, sub: &str, params: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(major.len() + sub.len() + 1);
    result.push_str(&major.to_ascii_lowercase());
    result.push('/');
    result.push_str(&sub.to_ascii_lowercase());

    // Sort parameters for consistent output
    let mut keys: Vec<_> = params.keys().collect();
    keys.sort();

    for key in keys {
        let value = &params[key];

        result.push_str("; ");
        result.push_str(&key.to_ascii_lowercase());

        if needs_encoding(value) {
            // RFC 2231 encoding
            result.push_str("*=utf-8''");
            for &b in value.as_bytes() {
                if b <= b' ' || b >= 0x7F || b == b'*' || b == b'\'' || b == b'%' || is_tspecial(b as char) {
                    result.push('%');
                    result.push(UPPER_HEX[(b >> 4) as usize] as char);
                    result.push(UPPER_HEX[(b & 0x0F) as usize] as char);
                } else {
                    result.push(b as char);
                }
            }
        } else if is_token(value) {
            result.push('=');
            result.push_str(value);
        } else {
            result.push_str("=\"");
            for ch in value.chars() {
                if ch == '"' || ch == '\\' {
                    result.push('\\');
                }
                result.push(ch);
            }
            result.push('"');
        }
    }

    result
}

/// Checks if a string needs encoding per RFC 2231.
fn needs_encoding(s: &str) -> bool {
    s.chars().any(|ch| (ch < ' ' || ch > '~') && ch != '\t')
}
