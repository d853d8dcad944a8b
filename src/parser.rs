//! Media type parsing.
//!
//! Implements the RFC 2045 `type "/" subtype *(";" parameter)` grammar with
//! RFC 2231 extended values and continuations.

use crate::error::{Error, Result};
use crate::grammar::{consume_token, consume_value, is_token, percent_decode};
use std::collections::HashMap;

/// Parses a media type value and any optional parameters, per RFC 1521.
///
/// Returns the top-level type and subtype converted to lowercase, and a map of
/// parameters keyed by lowercased name. A parameter given more than once keeps
/// its last value; an RFC 2231 extended value (`name*=`) wins over a plain one.
///
/// # Examples
///
/// ```
/// use mediatype::parse_media_type;
///
/// let (ty, sub, params) = parse_media_type("text/html; charset=utf-8").unwrap();
/// assert_eq!(ty, "text");
/// assert_eq!(sub, "html");
/// assert_eq!(params.get("charset").map(String::as_str), Some("utf-8"));
/// ```
pub fn parse_media_type(v: &str) -> Result<(String, String, HashMap<String, String>)> {
    let result = parse(v);
    match &result {
        Ok((ty, sub, params)) => {
            tracing::trace!(media_type = %v, top_level = %ty, subtype = %sub, parameters = params.len(), "parsed media type");
        }
        Err(err) => {
            tracing::debug!(media_type = %v, error = %err, "rejected media type");
        }
    }
    result
}

fn parse(v: &str) -> Result<(String, String, HashMap<String, String>)> {
    let (base, rest) = v.find(';').map_or((v, ""), |i| v.split_at(i));

    let base = base.trim();
    if base.is_empty() {
        return Err(Error::media_type("no media type"));
    }

    let Some((major, sub)) = base.split_once('/') else {
        return Err(Error::media_type("expected slash after first token"));
    };
    let (major, sub) = (major.trim_end(), sub.trim_start());
    if major.is_empty() {
        return Err(Error::media_type("expected token before slash"));
    }
    if !is_token(major) {
        return Err(Error::media_type(format!("invalid type {:?}", major)));
    }
    if sub.is_empty() {
        return Err(Error::media_type("expected token after slash"));
    }
    if !is_token(sub) {
        return Err(Error::media_type(format!("invalid subtype {:?}", sub)));
    }

    let params = parse_parameters(rest)?;
    Ok((major.to_ascii_lowercase(), sub.to_ascii_lowercase(), params))
}

/// Parses the `*(";" parameter)` tail of a media type.
fn parse_parameters(mut v: &str) -> Result<HashMap<String, String>> {
    let mut params = HashMap::new();
    // Base name -> raw RFC 2231 keys ("title*", "title*0", "title*1*", ...).
    let mut extended: HashMap<String, HashMap<String, String>> = HashMap::new();

    loop {
        v = v.trim_start();
        let Some(rest) = v.strip_prefix(';') else {
            if v.is_empty() {
                break;
            }
            return Err(Error::parameter(format!("unexpected content {:?}", v)));
        };
        let rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with(';') {
            v = rest;
            continue;
        }

        let (key, value, rest) = consume_media_param(rest)?;
        v = rest;
        match key.find('*') {
            Some(0) => {
                return Err(Error::parameter(format!("invalid parameter name {:?}", key)));
            }
            Some(star) => {
                extended
                    .entry(key[..star].to_string())
                    .or_default()
                    .insert(key, value);
            }
            None => {
                params.insert(key, value);
            }
        }
    }

    for (name, pieces) in extended {
        if let Some(value) = assemble_extended(&name, &pieces)? {
            params.insert(name, value);
        }
    }

    Ok(params)
}

/// Consumes one `name "=" value` clause, returning the lowercased name.
fn consume_media_param(v: &str) -> Result<(String, String, &str)> {
    let (name, rest) = consume_token(v);
    if name.is_empty() {
        return Err(Error::parameter(format!("expected parameter name in {:?}", v)));
    }

    let Some(rest) = rest.trim_start().strip_prefix('=') else {
        return Err(Error::parameter(format!("missing '=' after parameter {:?}", name)));
    };
    let (value, rest) = consume_value(rest.trim_start())?;

    Ok((name.to_ascii_lowercase(), value, rest))
}

/// Joins the RFC 2231 pieces of one parameter.
///
/// Returns `None` when neither `name*` nor `name*0` is present.
fn assemble_extended(name: &str, pieces: &HashMap<String, String>) -> Result<Option<String>> {
    if let Some(encoded) = pieces.get(&format!("{}*", name)) {
        return decode_utf8(name, decode_extended(encoded)?).map(Some);
    }

    let mut bytes = Vec::new();
    let mut found = false;
    for n in 0..pieces.len() {
        if let Some(plain) = pieces.get(&format!("{}*{}", name, n)) {
            bytes.extend_from_slice(plain.as_bytes());
        } else if let Some(encoded) = pieces.get(&format!("{}*{}*", name, n)) {
            if n == 0 {
                bytes.extend(decode_extended(encoded)?);
            } else {
                bytes.extend(percent_decode(encoded)?);
            }
        } else {
            break;
        }
        found = true;
    }

    if !found {
        return Ok(None);
    }
    decode_utf8(name, bytes).map(Some)
}

/// Decodes `charset'language'pct-encoded` into raw bytes.
fn decode_extended(s: &str) -> Result<Vec<u8>> {
    let mut parts = s.splitn(3, '\'');
    let (Some(charset), Some(_language), Some(encoded)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::parameter(format!("extended value {:?} lacks a charset", s)));
    };

    let bytes = percent_decode(encoded)?;
    match charset.to_ascii_lowercase().as_str() {
        "utf-8" => Ok(bytes),
        "us-ascii" if bytes.is_ascii() => Ok(bytes),
        "us-ascii" => Err(Error::parameter("non-ASCII byte in us-ascii value")),
        _ => Err(Error::parameter(format!("unsupported charset {:?}", charset))),
    }
}

fn decode_utf8(name: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|_| Error::parameter(format!("parameter {:?} is not valid UTF-8", name)))
}
