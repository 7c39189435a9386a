//! Decoding of quoted string literals.
//!
//! Escapes are decoded in a single left-to-right pass. `\u` sequences are
//! not decoded: the backslash, the `u` and the digits that follow are kept
//! verbatim, as is any other unrecognized escape pair.

use crate::error::ParseError;

/// Decodes a trimmed slice that starts with `"`.
pub(crate) fn parse_string_literal(slice: &str) -> Result<String, ParseError> {
    let body = slice
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(ParseError::UnterminatedString)?;

    if !body.contains(['\\', '"']) {
        return Ok(body.to_owned());
    }
    unescape(body)
}

fn unescape(body: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some('/') => out.push('/'),
                Some('b') => out.push('\u{8}'),
                Some('f') => out.push('\u{c}'),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                // The closing quote was escaped.
                None => return Err(ParseError::UnterminatedString),
            },
            '"' => return Err(ParseError::InvalidFormat),
            c => out.push(c),
        }
    }
    Ok(out)
}
