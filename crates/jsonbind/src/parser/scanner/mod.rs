//! Scanner: finds top-level separators inside a container body.
//!
//! The parser strips the outer brackets of an array or object and hands the
//! body to a [`Scanner`]. Each call to [`Scanner::next_top_level`] walks
//! forward until it meets one of the requested separator bytes at nesting
//! depth zero, outside any string literal.
//!
//! Invariants
//! - Separators, quotes, backslashes and brackets are all ASCII, so walking
//!   bytes never splits a UTF-8 sequence and every returned index is a char
//!   boundary.
//! - Depth never goes below zero: a stray `}` or `]` is reported as soon as
//!   it is seen.
//! - Once the end of the body is reached, the scanner has verified that every
//!   string literal and every nested container was closed.

use crate::error::ParseError;

#[derive(Debug)]
pub(crate) struct Scanner<'src> {
    bytes: &'src [u8],
    /// Container being scanned, used in `Unterminated` errors.
    container: &'static str,
    pos: usize,
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(body: &'src str, container: &'static str) -> Self {
        Self {
            bytes: body.as_bytes(),
            container,
            pos: 0,
            depth: 0,
            in_string: false,
            escaped: false,
        }
    }

    /// Returns the byte index of the next separator in `separators` found at
    /// depth zero, or `None` once the body is exhausted.
    pub(crate) fn next_top_level(&mut self, separators: &[u8]) -> Result<Option<usize>, ParseError> {
        while let Some(&b) = self.bytes.get(self.pos) {
            let at = self.pos;
            self.pos += 1;

            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if b == b'\\' {
                    self.escaped = true;
                } else if b == b'"' {
                    self.in_string = false;
                }
                continue;
            }

            match b {
                b'"' => self.in_string = true,
                b'{' | b'[' => self.depth += 1,
                b'}' | b']' => {
                    self.depth = self
                        .depth
                        .checked_sub(1)
                        .ok_or(ParseError::UnexpectedClose(b as char))?;
                }
                _ if self.depth == 0 && separators.contains(&b) => return Ok(Some(at)),
                _ => {}
            }
        }

        if self.in_string {
            return Err(ParseError::UnterminatedString);
        }
        if self.depth != 0 {
            return Err(ParseError::Unterminated(self.container));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests;
