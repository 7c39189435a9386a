//! Shape descriptors: the static field tables the binder walks.
//!
//! A [`ShapeDescriptor`] lists, for one target type, how to construct a
//! default instance and which fields exist. Every field carries a closed
//! [`FieldTag`] fixed at registration time together with a typed setter, so
//! binding never has to discover anything about the target at runtime.
//!
//! Descriptors are usually registered once per type with the
//! [`shape!`](crate::shape!) macro; [`ShapeDescriptor::builder`] is the
//! manual form:
//!
//! ```rust
//! use std::sync::OnceLock;
//!
//! use jsonbind::{Shape, ShapeDescriptor};
//!
//! #[derive(Default)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//!     label: String,
//! }
//!
//! impl Shape for Point {
//!     fn descriptor() -> &'static ShapeDescriptor<Self> {
//!         static DESCRIPTOR: OnceLock<ShapeDescriptor<Point>> = OnceLock::new();
//!         DESCRIPTOR.get_or_init(|| {
//!             ShapeDescriptor::builder("Point")
//!                 .construct(Point::default)
//!                 .primitive("X", |p, v| p.x = v)
//!                 .primitive("Y", |p, v| p.y = v)
//!                 .string("Label", |p, v| p.label = v)
//!                 .build()
//!         })
//!     }
//! }
//!
//! let p: Point = jsonbind::deserialize(r#"{"x": 1, "y": 2.5, "label": "a"}"#).unwrap();
//! assert_eq!((p.x, p.y, p.label.as_str()), (1.0, 2.5, "a"));
//! ```

use core::fmt;

use indexmap::IndexMap;

use crate::{
    binder::FieldCx,
    coerce::Primitive,
    error::BindError,
    value::{Map, Value},
};

/// A type that can be bound from a JSON object.
pub trait Shape: Sized + 'static {
    /// The descriptor registered for this type. Built once, then shared.
    fn descriptor() -> &'static ShapeDescriptor<Self>;
}

/// The primitive kinds a scalar field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        })
    }
}

/// What a sequence field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTag {
    Primitive(PrimitiveKind),
    String,
    /// Holds the nested shape's registered name.
    NestedShape(&'static str),
}

/// What a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag {
    Primitive(PrimitiveKind),
    String,
    /// Holds the nested shape's registered name.
    NestedShape(&'static str),
    SequenceOf(ElementTag),
}

type Assign<T, V> = Box<dyn Fn(&mut T, &V, FieldCx) -> Result<(), BindError> + Send + Sync>;

fn assign<T, V: ?Sized, F>(f: F) -> Assign<T, V>
where
    F: Fn(&mut T, &V, FieldCx) -> Result<(), BindError> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Typed setter of one field, keyed by the field's tag.
///
/// Nested shape names are resolved lazily so that a shape may refer to
/// itself, directly or through a sequence, while it is being registered.
pub(crate) enum Slot<T> {
    Primitive {
        kind: PrimitiveKind,
        assign: Assign<T, Value>,
    },
    String(fn(&mut T, String)),
    NestedShape {
        shape: fn() -> &'static str,
        assign: Assign<T, Map>,
    },
    SequenceOf {
        element: fn() -> ElementTag,
        assign: Assign<T, [Value]>,
    },
}

/// One registered field of a [`ShapeDescriptor`].
pub struct Field<T> {
    name: &'static str,
    slot: Slot<T>,
}

impl<T> Field<T> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn tag(&self) -> FieldTag {
        match &self.slot {
            Slot::Primitive { kind, .. } => FieldTag::Primitive(*kind),
            Slot::String(_) => FieldTag::String,
            Slot::NestedShape { shape, .. } => FieldTag::NestedShape(shape()),
            Slot::SequenceOf { element, .. } => FieldTag::SequenceOf(element()),
        }
    }

    pub(crate) fn slot(&self) -> &Slot<T> {
        &self.slot
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag())
            .finish()
    }
}

/// The registered construction capability and field table of `T`.
pub struct ShapeDescriptor<T> {
    name: &'static str,
    construct: Option<fn() -> T>,
    fields: IndexMap<&'static str, Field<T>>,
}

impl<T: 'static> ShapeDescriptor<T> {
    #[must_use]
    pub fn builder(name: &'static str) -> ShapeBuilder<T> {
        ShapeBuilder {
            name,
            construct: None,
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds a default instance, or `None` if no constructor was registered.
    #[must_use]
    pub fn construct(&self) -> Option<T> {
        self.construct.map(|construct| construct())
    }

    /// Looks a field up by its exact identifier.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field<T>> {
        self.fields.get(name)
    }

    /// Iterates fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.fields.values()
    }
}

impl<T> fmt::Debug for ShapeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("name", &self.name)
            .field("constructible", &self.construct.is_some())
            .field("fields", &self.fields.values().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for a [`ShapeDescriptor`].
///
/// Registering the same field name twice keeps the later registration.
#[must_use]
pub struct ShapeBuilder<T> {
    name: &'static str,
    construct: Option<fn() -> T>,
    fields: IndexMap<&'static str, Field<T>>,
}

impl<T: 'static> ShapeBuilder<T> {
    pub fn construct(mut self, construct: fn() -> T) -> Self {
        self.construct = Some(construct);
        self
    }

    fn field(mut self, name: &'static str, slot: Slot<T>) -> Self {
        self.fields.insert(name, Field { name, slot });
        self
    }

    pub fn primitive<P: Primitive>(self, name: &'static str, set: fn(&mut T, P)) -> Self {
        self.field(
            name,
            Slot::Primitive {
                kind: P::KIND,
                assign: assign(move |target, value: &Value, cx| {
                    set(target, cx.primitive(value, None)?);
                    Ok(())
                }),
            },
        )
    }

    pub fn string(self, name: &'static str, set: fn(&mut T, String)) -> Self {
        self.field(name, Slot::String(set))
    }

    pub fn nested<N: Shape>(self, name: &'static str, set: fn(&mut T, N)) -> Self {
        self.field(
            name,
            Slot::NestedShape {
                shape: || N::descriptor().name(),
                assign: assign(move |target, map: &Map, cx| {
                    set(target, cx.binder().bind_object(N::descriptor(), map)?);
                    Ok(())
                }),
            },
        )
    }

    pub fn primitive_seq<P: Primitive>(self, name: &'static str, set: fn(&mut T, Vec<P>)) -> Self {
        self.field(
            name,
            Slot::SequenceOf {
                element: || ElementTag::Primitive(P::KIND),
                assign: assign(move |target, items: &[Value], cx| {
                    let values = items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| cx.primitive(item, Some(i)))
                        .collect::<Result<_, _>>()?;
                    set(target, values);
                    Ok(())
                }),
            },
        )
    }

    pub fn string_seq(self, name: &'static str, set: fn(&mut T, Vec<String>)) -> Self {
        self.field(
            name,
            Slot::SequenceOf {
                element: || ElementTag::String,
                assign: assign(move |target, items: &[Value], _cx| {
                    set(target, items.iter().map(|item| item.to_text().into_owned()).collect());
                    Ok(())
                }),
            },
        )
    }

    pub fn nested_seq<N: Shape>(self, name: &'static str, set: fn(&mut T, Vec<N>)) -> Self {
        self.field(
            name,
            Slot::SequenceOf {
                element: || ElementTag::NestedShape(N::descriptor().name()),
                assign: assign(move |target, items: &[Value], cx| {
                    let values = items
                        .iter()
                        .map(|item| cx.binder().bind(item))
                        .collect::<Result<_, _>>()?;
                    set(target, values);
                    Ok(())
                }),
            },
        )
    }

    pub fn build(self) -> ShapeDescriptor<T> {
        ShapeDescriptor {
            name: self.name,
            construct: self.construct,
            fields: self.fields,
        }
    }
}

/// Registers a [`Shape`] implementation backed by a lazily built descriptor.
///
/// Each entry reads `Identifier: kind => member`, where `Identifier` is the
/// field name matched against normalized JSON keys and `member` is the Rust
/// field assigned. Kinds are `primitive`, `string`, `nested`, and the
/// sequence forms `[primitive]`, `[string]`, `[nested]`. Primitive and
/// nested types are inferred from the member's type. The target type must
/// implement [`Default`].
///
/// ```rust
/// #[derive(Default)]
/// struct Friend {
///     name: String,
///     age: u32,
///     friends: Vec<Friend>,
/// }
///
/// jsonbind::shape! {
///     Friend {
///         Name: string => name,
///         Age: primitive => age,
///         Friends: [nested] => friends,
///     }
/// }
///
/// let f: Friend =
///     jsonbind::deserialize(r#"{"name":"Ann","age":30,"friends":[{"name":"Bo"}]}"#).unwrap();
/// assert_eq!(f.friends[0].name, "Bo");
/// ```
#[macro_export]
macro_rules! shape {
    ($ty:ident { $($field:ident : $kind:tt => $member:ident),* $(,)? }) => {
        impl $crate::Shape for $ty {
            fn descriptor() -> &'static $crate::ShapeDescriptor<Self> {
                static DESCRIPTOR: ::std::sync::OnceLock<$crate::ShapeDescriptor<$ty>> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    let builder = $crate::ShapeDescriptor::<$ty>::builder(::core::stringify!($ty))
                        .construct(<$ty as ::core::default::Default>::default);
                    $(
                        let builder = $crate::shape!(@field builder, $ty, $field, $kind, $member);
                    )*
                    builder.build()
                })
            }
        }
    };
    (@field $b:ident, $ty:ident, $field:ident, primitive, $member:ident) => {
        $b.primitive(::core::stringify!($field), |target: &mut $ty, value| target.$member = value)
    };
    (@field $b:ident, $ty:ident, $field:ident, string, $member:ident) => {
        $b.string(::core::stringify!($field), |target: &mut $ty, value| target.$member = value)
    };
    (@field $b:ident, $ty:ident, $field:ident, nested, $member:ident) => {
        $b.nested(::core::stringify!($field), |target: &mut $ty, value| target.$member = value)
    };
    (@field $b:ident, $ty:ident, $field:ident, [primitive], $member:ident) => {
        $b.primitive_seq(::core::stringify!($field), |target: &mut $ty, value| target.$member = value)
    };
    (@field $b:ident, $ty:ident, $field:ident, [string], $member:ident) => {
        $b.string_seq(::core::stringify!($field), |target: &mut $ty, value| target.$member = value)
    };
    (@field $b:ident, $ty:ident, $field:ident, [nested], $member:ident) => {
        $b.nested_seq(::core::stringify!($field), |target: &mut $ty, value| target.$member = value)
    };
}
