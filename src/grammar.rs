//! Grammar helpers for media type tokens and parameters.
//!
//! Based on RFC 2045 §5.1 token definitions and the RFC 2231 extended
//! parameter value encoding.

use crate::error::{Error, Result};

/// Reports whether the character is in 'tspecials' as defined by RFC 1521 and RFC 2045.
///
/// tspecials := "(" / ")" / "<" / ">" / "@" / "," / ";" / ":" / "\" / <"> / "/" / "[" / "]" / "?" / "="
pub fn is_tspecial(c: char) -> bool {
    matches!(c, '(' | ')' | '<' | '>' | '@' | ',' | ';' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '=')
}

/// Reports whether the character is in 'token' as defined by RFC 1521 and RFC 2045.
///
/// token := 1*<any (US-ASCII) CHAR except SPACE, CTLs, or tspecials>
pub fn is_token_char(c: char) -> bool {
    c > '\x20' && c < '\x7f' && !is_tspecial(c)
}

/// Reports whether the string is a valid 'token' as defined by RFC 1521 and RFC 2045.
///
/// A token must be non-empty and contain only valid token characters.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Splits `v` into its leading run of token characters and the remainder.
///
/// The token is empty when `v` does not start with a token character.
pub(crate) fn consume_token(v: &str) -> (&str, &str) {
    let end = v
        .char_indices()
        .find(|&(_, c)| !is_token_char(c))
        .map_or(v.len(), |(i, _)| i);
    v.split_at(end)
}

/// Consumes a parameter value: either a token or a quoted string.
///
/// Returns the unquoted value and the remaining input.
pub(crate) fn consume_value(v: &str) -> Result<(String, &str)> {
    let Some(quoted) = v.strip_prefix('"') else {
        let (token, rest) = consume_token(v);
        if token.is_empty() {
            return Err(Error::parameter("expected token or quoted string as value"));
        }
        return Ok((token.to_string(), rest));
    };

    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((value, &quoted[i + 1..])),
            // Only tspecials are escapable; a lone backslash stays literal so
            // unescaped file paths survive.
            '\\' => match chars.peek() {
                Some(&(_, next)) if is_tspecial(next) => {
                    value.push(next);
                    chars.next();
                }
                _ => value.push(c),
            },
            '\r' | '\n' => {
                return Err(Error::parameter("line break inside quoted string"));
            }
            _ => value.push(c),
        }
    }
    Err(Error::parameter("unterminated quoted string"))
}

/// Decodes `%XX` escapes of an RFC 2231 extended value into raw bytes.
pub(crate) fn percent_decode(s: &str) -> Result<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        let hi = bytes.get(i + 1).and_then(|&b| hex_value(b));
        let lo = bytes.get(i + 2).and_then(|&b| hex_value(b));
        match (hi, lo) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            _ => {
                return Err(Error::parameter(format!(
                    "invalid percent escape in {:?}",
                    s
                )))
            }
        }
        i += 3;
    }
    Ok(out)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
