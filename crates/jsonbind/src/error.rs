use thiserror::Error;

use crate::{shape::PrimitiveKind, value::ValueKind};

/// Malformed JSON text.
///
/// Errors carry no position; the first problem found aborts the parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An unquoted token that is neither a literal nor a number, or an empty
    /// value slot.
    #[error("Invalid JSON format")]
    InvalidFormat,
    #[error("unexpected closing '{0}'")]
    UnexpectedClose(char),
    #[error("unterminated {0}")]
    Unterminated(&'static str),
    #[error("unterminated string")]
    UnterminatedString,
    #[error("object member without a ':' separator")]
    MissingColon,
}

/// Why a single value could not become a primitive or string field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoerceError {
    #[error("cannot convert {found} to {kind}")]
    Incompatible { kind: PrimitiveKind, found: ValueKind },
    #[error("{value} is out of range for {kind}")]
    OutOfRange { kind: PrimitiveKind, value: f64 },
    #[error("cannot parse {text:?} as {kind}")]
    Unparsable { kind: PrimitiveKind, text: String },
    #[error("cannot convert {found} to string")]
    NotText { found: ValueKind },
}

/// A syntactically valid value that does not fit the requested shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("shape `{shape}` has no constructor")]
    NoConstructor { shape: &'static str },
    #[error("expected an object for `{shape}`, found {found}")]
    ExpectedObject {
        shape: &'static str,
        found: ValueKind,
    },
    #[error("field `{shape}.{field}` expects an array, found {found}")]
    ExpectedArray {
        shape: &'static str,
        field: &'static str,
        found: ValueKind,
    },
    /// `field` includes the element index for entries of primitive
    /// sequences, e.g. `Scores[2]`. Errors inside nested shape elements
    /// name the nested shape's own field instead.
    #[error("field `{shape}.{field}`: {source}")]
    Coerce {
        shape: &'static str,
        field: String,
        #[source]
        source: CoerceError,
    },
}

/// Any failure of [`deserialize`](crate::deserialize).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("bind error: {0}")]
    Bind(#[from] BindError),
}
