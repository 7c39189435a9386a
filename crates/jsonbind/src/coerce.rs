//! Best-effort conversion of scalar JSON values into primitive fields.
//!
//! | from \ to | integers          | floats   | `bool`        | `char`       |
//! |-----------|-------------------|----------|---------------|--------------|
//! | number    | round half even   | as is    | non-zero      | -            |
//! | boolean   | `1` / `0`         | `1`/`0`  | as is         | -            |
//! | string    | parse trimmed     | parse    | `true`/`false`| single char  |
//!
//! `null`, arrays and objects never coerce. String fields accept strings as
//! is and render numbers and booleans as text.

use crate::{error::CoerceError, shape::PrimitiveKind, value::Value};

/// A scalar type that a JSON value can be coerced into.
///
/// Implemented for `bool`, `char`, the fixed-width integers and both float
/// types.
pub trait Primitive: Sized + 'static {
    /// Reported in field tags and coercion errors.
    const KIND: PrimitiveKind;

    /// # Errors
    ///
    /// Returns a [`CoerceError`] when `value` has an incompatible kind, lies
    /// outside the target range, or is a string that does not parse.
    fn coerce(value: &Value) -> Result<Self, CoerceError>;
}

fn incompatible(kind: PrimitiveKind, value: &Value) -> CoerceError {
    CoerceError::Incompatible {
        kind,
        found: value.kind(),
    }
}

fn unparsable(kind: PrimitiveKind, text: &str) -> CoerceError {
    CoerceError::Unparsable {
        kind,
        text: text.to_owned(),
    }
}

macro_rules! integer_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Primitive for $ty {
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            fn coerce(value: &Value) -> Result<Self, CoerceError> {
                match value {
                    Value::Number(n) => {
                        let rounded = n.round_ties_even();
                        // `MAX + 1` is exact in f64 for every width, unlike `MAX` for 64-bit types.
                        if rounded.is_nan() || rounded < <$ty>::MIN as f64 || rounded >= <$ty>::MAX as f64 + 1.0 {
                            return Err(CoerceError::OutOfRange { kind: Self::KIND, value: *n });
                        }
                        Ok(rounded as $ty)
                    }
                    Value::Boolean(b) => Ok(<$ty>::from(*b)),
                    Value::String(s) => s.trim().parse().map_err(|_| unparsable(Self::KIND, s)),
                    other => Err(incompatible(Self::KIND, other)),
                }
            }
        }
    )*};
}

integer_primitive! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl Primitive for f64 {
    const KIND: PrimitiveKind = PrimitiveKind::F64;

    fn coerce(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Number(n) => Ok(*n),
            Value::Boolean(b) => Ok(f64::from(*b)),
            Value::String(s) => s.trim().parse().map_err(|_| unparsable(Self::KIND, s)),
            other => Err(incompatible(Self::KIND, other)),
        }
    }
}

impl Primitive for f32 {
    const KIND: PrimitiveKind = PrimitiveKind::F32;

    #[allow(clippy::cast_possible_truncation)]
    fn coerce(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Number(n) => Ok(*n as f32),
            Value::Boolean(b) => Ok(f32::from(*b)),
            Value::String(s) => s.trim().parse().map_err(|_| unparsable(Self::KIND, s)),
            other => Err(incompatible(Self::KIND, other)),
        }
    }
}

impl Primitive for bool {
    const KIND: PrimitiveKind = PrimitiveKind::Bool;

    fn coerce(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Boolean(b) => Ok(*b),
            Value::Number(n) => Ok(*n != 0.0),
            Value::String(s) => {
                let t = s.trim();
                if t.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if t.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(unparsable(Self::KIND, s))
                }
            }
            other => Err(incompatible(Self::KIND, other)),
        }
    }
}

impl Primitive for char {
    const KIND: PrimitiveKind = PrimitiveKind::Char;

    fn coerce(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(unparsable(Self::KIND, s)),
                }
            }
            other => Err(incompatible(Self::KIND, other)),
        }
    }
}

/// Coerces a value into a string field.
pub(crate) fn text(value: &Value) -> Result<String, CoerceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(_) | Value::Boolean(_) => Ok(value.to_text().into_owned()),
        other => Err(CoerceError::NotText {
            found: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use rstest::rstest;

    use super::*;
    use crate::value::ValueKind;

    #[rstest]
    #[case(Value::Number(25.0), 25)]
    #[case(Value::Number(2.5), 2)]
    #[case(Value::Number(3.5), 4)]
    #[case(Value::Number(-0.4), 0)]
    #[case(Value::Boolean(true), 1)]
    #[case(Value::String(" 42 ".into()), 42)]
    fn coerces_into_i32(#[case] value: Value, #[case] expected: i32) {
        assert_eq!(i32::coerce(&value).unwrap(), expected);
    }

    #[test]
    fn integer_range_is_checked() {
        assert_eq!(
            u8::coerce(&Value::Number(256.0)),
            Err(CoerceError::OutOfRange {
                kind: PrimitiveKind::U8,
                value: 256.0
            })
        );
        assert!(u32::coerce(&Value::Number(-1.0)).is_err());
        assert_eq!(u8::coerce(&Value::Number(255.4)).unwrap(), 255);
    }

    #[test]
    fn unparsable_strings_are_reported() {
        assert_eq!(
            i64::coerce(&Value::String("12abc".into())),
            Err(CoerceError::Unparsable {
                kind: PrimitiveKind::I64,
                text: "12abc".into()
            })
        );
        assert!(bool::coerce(&Value::String("yes".into())).is_err());
    }

    #[rstest]
    #[case(Value::Boolean(false), false)]
    #[case(Value::Number(0.0), false)]
    #[case(Value::Number(-3.0), true)]
    #[case(Value::String("True".into()), true)]
    #[case(Value::String(" false".into()), false)]
    fn coerces_into_bool(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(bool::coerce(&value).unwrap(), expected);
    }

    #[test]
    fn floats_and_chars() {
        assert_eq!(f64::coerce(&Value::Number(1.25)).unwrap(), 1.25);
        assert_eq!(f32::coerce(&Value::String("0.5".into())).unwrap(), 0.5);
        assert_eq!(char::coerce(&Value::String("x".into())).unwrap(), 'x');
        assert!(char::coerce(&Value::String("xy".into())).is_err());
        assert_eq!(
            char::coerce(&Value::Number(1.0)),
            Err(CoerceError::Incompatible {
                kind: PrimitiveKind::Char,
                found: ValueKind::Number
            })
        );
    }

    #[test]
    fn containers_and_null_never_coerce() {
        for value in [Value::Null, Value::Array(vec![]), Value::Object(Default::default())] {
            assert!(i32::coerce(&value).is_err());
            assert!(bool::coerce(&value).is_err());
            assert!(text(&value).is_err());
        }
    }

    #[test]
    fn text_renders_scalars() {
        assert_eq!(text(&Value::Number(25.0)).unwrap(), "25");
        assert_eq!(text(&Value::Boolean(false)).unwrap(), "false");
        assert_eq!(text(&Value::String("Alice".into())).unwrap(), "Alice");
    }
}
