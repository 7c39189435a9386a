//! Structural binder: maps a parsed object onto a registered shape.

use tracing::trace;

use crate::{
    coerce::{self, Primitive},
    error::BindError,
    options::BinderOptions,
    shape::{Shape, ShapeDescriptor, Slot},
    value::{Map, Value},
};

/// Binds [`Value`] trees onto [`Shape`] types.
///
/// Binding is lenient about extra data: object keys without a matching field
/// are skipped. Everything else is strict, and the first value that cannot be
/// coerced into its field aborts the whole bind.
///
/// ```rust
/// use jsonbind::{Binder, BinderOptions, Value};
///
/// #[derive(Default)]
/// struct Counter {
///     count: u32,
/// }
///
/// jsonbind::shape! {
///     Counter {
///         count: primitive => count,
///     }
/// }
///
/// let binder = Binder::new(BinderOptions {
///     key_normalizer: jsonbind::verbatim,
/// });
/// let value = jsonbind::parse(r#"{"count": 3, "Count": 9}"#).unwrap();
/// let counter: Counter = binder.bind(&value).unwrap();
/// assert_eq!(counter.count, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Binder {
    options: BinderOptions,
}

impl Binder {
    #[must_use]
    pub fn new(options: BinderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> BinderOptions {
        self.options
    }

    /// Binds `value`, which must be an object, onto `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ExpectedObject`] if `value` is not an object, and
    /// any error from [`Binder::bind_object`].
    pub fn bind<T: Shape>(&self, value: &Value) -> Result<T, BindError> {
        let descriptor = T::descriptor();
        match value {
            Value::Object(map) => self.bind_object(descriptor, map),
            other => Err(BindError::ExpectedObject {
                shape: descriptor.name(),
                found: other.kind(),
            }),
        }
    }

    /// Binds the members of `map` onto a fresh instance built by
    /// `descriptor`.
    ///
    /// # Errors
    ///
    /// Fails if the descriptor has no constructor or if any matched member
    /// cannot be coerced into its field.
    pub fn bind_object<T: 'static>(
        &self,
        descriptor: &ShapeDescriptor<T>,
        map: &Map,
    ) -> Result<T, BindError> {
        let shape = descriptor.name();
        let mut target = descriptor
            .construct()
            .ok_or(BindError::NoConstructor { shape })?;
        trace!(shape, members = map.len(), "binding object");

        for (key, value) in map {
            let ident = (self.options.key_normalizer)(key);
            let Some(field) = descriptor.field(&ident) else {
                trace!(shape, key = %key, "skipping unknown key");
                continue;
            };
            let cx = FieldCx {
                binder: *self,
                shape,
                field: field.name(),
            };

            match field.slot() {
                Slot::Primitive { assign, .. } => assign(&mut target, value, cx)?,
                Slot::String(set) => set(&mut target, cx.text(value)?),
                Slot::NestedShape { shape: nested, assign } => match value {
                    Value::Object(members) => assign(&mut target, members, cx)?,
                    other => {
                        return Err(BindError::ExpectedObject {
                            shape: nested(),
                            found: other.kind(),
                        });
                    }
                },
                Slot::SequenceOf { assign, .. } => match value {
                    Value::Array(items) => assign(&mut target, items.as_slice(), cx)?,
                    other => {
                        return Err(BindError::ExpectedArray {
                            shape,
                            field: field.name(),
                            found: other.kind(),
                        });
                    }
                },
            }
        }

        Ok(target)
    }
}

/// The field being bound, handed to registered setters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldCx {
    binder: Binder,
    shape: &'static str,
    field: &'static str,
}

impl FieldCx {
    pub(crate) fn binder(&self) -> &Binder {
        &self.binder
    }

    /// Coerces a field value, or the `index`-th entry of a sequence field.
    pub(crate) fn primitive<P: Primitive>(
        &self,
        value: &Value,
        index: Option<usize>,
    ) -> Result<P, BindError> {
        P::coerce(value).map_err(|source| BindError::Coerce {
            shape: self.shape,
            field: match index {
                Some(i) => format!("{}[{i}]", self.field),
                None => self.field.to_owned(),
            },
            source,
        })
    }

    fn text(&self, value: &Value) -> Result<String, BindError> {
        coerce::text(value).map_err(|source| BindError::Coerce {
            shape: self.shape,
            field: self.field.to_owned(),
            source,
        })
    }
}
