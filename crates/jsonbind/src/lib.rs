//! A JSON value parser and static shape binder.
//!
//! [`parse`] turns JSON text into a [`Value`] tree. [`bind`] walks such a
//! tree against the [`ShapeDescriptor`] registered for a type and returns a
//! populated instance. [`deserialize`] does both.
//!
//! ```rust
//! #[derive(Default)]
//! struct Person {
//!     name: String,
//!     age: i32,
//!     is_student: bool,
//! }
//!
//! jsonbind::shape! {
//!     Person {
//!         Name: string => name,
//!         Age: primitive => age,
//!         IsStudent: primitive => is_student,
//!     }
//! }
//!
//! let person: Person =
//!     jsonbind::deserialize(r#"{"name":"Alice","age":25,"isStudent":false}"#).unwrap();
//! assert_eq!(person.name, "Alice");
//! assert_eq!(person.age, 25);
//! assert!(!person.is_student);
//! ```
//!
//! Object keys are matched to fields after upper-casing their first
//! character; see [`BinderOptions`] to change that.

#![allow(missing_docs)]

mod binder;
mod coerce;
mod error;
mod options;
mod parser;
mod shape;
mod value;

#[cfg(test)]
mod tests;

use tracing::debug;

pub use binder::Binder;
pub use coerce::Primitive;
pub use error::{BindError, CoerceError, Error, ParseError};
pub use options::{BinderOptions, KeyNormalizer, ParserOptions, capitalize_first, verbatim};
pub use parser::Parser;
pub use shape::{ElementTag, Field, FieldTag, PrimitiveKind, Shape, ShapeBuilder, ShapeDescriptor};
pub use value::{Array, Map, Value, ValueKind};

/// Parses JSON text with default [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not a well-formed JSON value.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Parser::default().parse(text)
}

/// Binds an object value onto `T` with default [`BinderOptions`].
///
/// # Errors
///
/// Returns a [`BindError`] if `value` is not an object or does not fit `T`.
pub fn bind<T: Shape>(value: &Value) -> Result<T, BindError> {
    Binder::default().bind(value)
}

/// Parses `text` and binds the result onto `T`.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed text and [`Error::Bind`] when the
/// parsed value does not fit `T`.
pub fn deserialize<T: Shape>(text: &str) -> Result<T, Error> {
    deserialize_with(text, &Parser::default(), &Binder::default())
}

/// Like [`deserialize`], with an explicit parser and binder configuration.
///
/// # Errors
///
/// See [`deserialize`].
pub fn deserialize_with<T: Shape>(text: &str, parser: &Parser, binder: &Binder) -> Result<T, Error> {
    let value = parser.parse(text).inspect_err(|e| {
        debug!(error = %e, len = text.len(), "parse failed");
    })?;
    let bound = binder.bind(&value).inspect_err(|e| {
        debug!(error = %e, shape = T::descriptor().name(), "bind failed");
    })?;
    Ok(bound)
}
