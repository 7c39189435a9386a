//! Recursive-descent JSON value parser.
//!
//! Parsing works on slices of the input rather than on a token stream. A
//! trimmed slice is dispatched on its first character:
//!
//! - `null`, `true` and `false` must match exactly.
//! - `"` starts a string literal (see [`escape`]).
//! - `[` and `{` start containers. Their bodies are split at top-level commas
//!   (and, for objects, at the first top-level colon of each member) by the
//!   [`Scanner`], and every piece is parsed recursively.
//! - Anything else must be a finite floating-point number.
//!
//! Scanning and value construction are interleaved: each separator found by
//! the scanner immediately produces the value before it. The first error
//! aborts the whole parse, so no partially built tree ever escapes.
//!
//! Recursion depth equals the nesting depth of the input.

mod escape;
mod scanner;

use scanner::Scanner;

use crate::{
    error::ParseError,
    options::ParserOptions,
    value::{Map, Value},
};

/// Parses JSON text into a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use jsonbind::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions::default());
/// let value = parser.parse(r#"{"a": [1, 2], "b": null}"#).unwrap();
/// assert_eq!(value.get("b"), Some(&Value::Null));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parses a complete JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first malformed literal, bracket
    /// mismatch, missing member separator or unrecognized token.
    pub fn parse(&self, text: &str) -> Result<Value, ParseError> {
        self.parse_value(text)
    }

    fn trim<'a>(&self, slice: &'a str) -> &'a str {
        slice.trim_matches(|c| self.options.is_whitespace(c))
    }

    fn parse_value(&self, slice: &str) -> Result<Value, ParseError> {
        match self.trim(slice) {
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            s if s.starts_with('"') => escape::parse_string_literal(s).map(Value::String),
            s if s.starts_with('[') => self.parse_array(s),
            s if s.starts_with('{') => self.parse_object(s),
            s => parse_number(s),
        }
    }

    fn parse_array(&self, slice: &str) -> Result<Value, ParseError> {
        let body = slice[1..]
            .strip_suffix(']')
            .ok_or_else(|| unclosed(&slice[1..], "array"))?;

        let mut items = Vec::new();
        if self.trim(body).is_empty() {
            return Ok(Value::Array(items));
        }

        let mut scanner = Scanner::new(body, "array");
        let mut start = 0;
        loop {
            let comma = scanner.next_top_level(b",")?;
            let end = comma.unwrap_or(body.len());
            items.push(self.parse_value(&body[start..end])?);
            match comma {
                Some(at) => start = at + 1,
                None => break,
            }
        }
        Ok(Value::Array(items))
    }

    fn parse_object(&self, slice: &str) -> Result<Value, ParseError> {
        let body = slice[1..]
            .strip_suffix('}')
            .ok_or_else(|| unclosed(&slice[1..], "object"))?;

        let mut map = Map::new();
        if self.trim(body).is_empty() {
            return Ok(Value::Object(map));
        }

        let mut scanner = Scanner::new(body, "object");
        let mut start = 0;
        let mut pending_key: Option<String> = None;
        loop {
            // Only the first colon of a member splits key from value.
            let separators: &[u8] = if pending_key.is_some() { b"," } else { b":," };
            let found = scanner.next_top_level(separators)?;
            let end = found.unwrap_or(body.len());
            let piece = &body[start..end];

            match (pending_key.take(), found.map(|at| body.as_bytes()[at])) {
                (None, Some(b':')) => {
                    let key = self.parse_value(piece)?;
                    pending_key = Some(key.to_text().into_owned());
                }
                (None, _) => return Err(ParseError::MissingColon),
                (Some(key), _) => {
                    let value = self.parse_value(piece)?;
                    map.insert(key, value);
                }
            }

            match found {
                Some(at) => start = at + 1,
                None => break,
            }
        }
        Ok(Value::Object(map))
    }
}

/// Classifies a container slice that does not end with its closing bracket.
///
/// A close at depth zero means the container ended early and text follows it.
fn unclosed(body: &str, container: &'static str) -> ParseError {
    match Scanner::new(body, container).next_top_level(b"") {
        Err(ParseError::UnexpectedClose(_)) => ParseError::InvalidFormat,
        Err(e) => e,
        Ok(_) => ParseError::Unterminated(container),
    }
}

fn parse_number(slice: &str) -> Result<Value, ParseError> {
    slice
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Value::Number)
        .ok_or(ParseError::InvalidFormat)
}
