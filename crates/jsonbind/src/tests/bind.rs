#![allow(clippy::float_cmp)]

use std::sync::OnceLock;

use rstest::rstest;

use crate::{
    BindError, Binder, BinderOptions, CoerceError, PrimitiveKind, Shape, ShapeDescriptor, Value,
    ValueKind, bind, parse, verbatim,
};

#[derive(Debug, Default, PartialEq)]
struct Address {
    street: String,
    city: String,
    country: String,
}

#[derive(Debug, Default, PartialEq)]
struct Friend {
    name: String,
    age: i32,
}

#[derive(Debug, Default, PartialEq)]
struct Rec {
    name: String,
    age: i32,
    address: Address,
    interests: Vec<String>,
    friends: Vec<Friend>,
    scores: Vec<u8>,
    initial: char,
    ratio: f32,
}

crate::shape! {
    Address {
        Street: string => street,
        City: string => city,
        Country: string => country,
    }
}

crate::shape! {
    Friend {
        Name: string => name,
        Age: primitive => age,
    }
}

crate::shape! {
    Rec {
        Name: string => name,
        Age: primitive => age,
        Address: nested => address,
        Interests: [string] => interests,
        Friends: [nested] => friends,
        Scores: [primitive] => scores,
        Initial: primitive => initial,
        Ratio: primitive => ratio,
    }
}

/// Registered by hand without a constructor.
struct Opaque;

impl Shape for Opaque {
    fn descriptor() -> &'static ShapeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<ShapeDescriptor<Opaque>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| ShapeDescriptor::builder("Opaque").build())
    }
}

fn bind_text<T: Shape>(text: &str) -> Result<T, BindError> {
    bind(&parse(text).expect("fixture parses"))
}

#[test]
fn unknown_keys_are_skipped() {
    let friend: Friend = bind_text(r#"{"unused":1,"age":5}"#).unwrap();
    assert_eq!(
        friend,
        Friend {
            name: String::new(),
            age: 5
        }
    );
}

#[test]
fn string_sequence_keeps_order() {
    let rec: Rec = bind_text(r#"{"interests":["a","b"]}"#).unwrap();
    assert_eq!(rec.interests, ["a", "b"]);
}

#[test]
fn string_sequence_stringifies_every_entry() {
    let rec: Rec = bind_text(r#"{"interests":["a",1,true,null,{"k":[2]}]}"#).unwrap();
    assert_eq!(rec.interests, ["a", "1", "true", "null", r#"{"k":[2]}"#]);
}

#[test]
fn nested_shapes_and_sequences_are_bound() {
    let rec: Rec = bind_text(
        r#"{
            "name": "John",
            "age": 30,
            "address": {"street": "1 Main St, Apt 2", "city": "Springfield", "country": "US"},
            "friends": [{"name": "Ann", "age": 31}, {"name": "Bob", "age": 29}],
            "scores": [1, 2.0, "3"],
            "initial": "J",
            "ratio": 0.5
        }"#,
    )
    .unwrap();

    assert_eq!(rec.name, "John");
    assert_eq!(rec.age, 30);
    assert_eq!(rec.address.street, "1 Main St, Apt 2");
    assert_eq!(rec.address.city, "Springfield");
    assert_eq!(rec.address.country, "US");
    assert_eq!(rec.friends.len(), 2);
    assert_eq!(rec.friends[1], Friend { name: "Bob".into(), age: 29 });
    assert_eq!(rec.scores, [1, 2, 3]);
    assert_eq!(rec.initial, 'J');
    assert_eq!(rec.ratio, 0.5);
}

#[test]
fn later_duplicate_key_wins() {
    let friend: Friend = bind_text(r#"{"age":1,"name":"x","age":2}"#).unwrap();
    assert_eq!(friend.age, 2);
}

#[test]
fn scalar_fields_accept_cross_kind_values() {
    let friend: Friend = bind_text(r#"{"name": 42, "age": "7"}"#).unwrap();
    assert_eq!(friend, Friend { name: "42".into(), age: 7 });
}

#[rstest]
#[case(
    r#"{"age": null}"#,
    BindError::Coerce {
        shape: "Friend",
        field: "Age".into(),
        source: CoerceError::Incompatible { kind: PrimitiveKind::I32, found: ValueKind::Null },
    }
)]
#[case(
    r#"{"age": [1]}"#,
    BindError::Coerce {
        shape: "Friend",
        field: "Age".into(),
        source: CoerceError::Incompatible { kind: PrimitiveKind::I32, found: ValueKind::Array },
    }
)]
#[case(
    r#"{"name": {"first": "A"}}"#,
    BindError::Coerce {
        shape: "Friend",
        field: "Name".into(),
        source: CoerceError::NotText { found: ValueKind::Object },
    }
)]
#[case(
    r#"{"age": 1e10}"#,
    BindError::Coerce {
        shape: "Friend",
        field: "Age".into(),
        source: CoerceError::OutOfRange { kind: PrimitiveKind::I32, value: 1e10 },
    }
)]
fn friend_mismatches(#[case] text: &str, #[case] expected: BindError) {
    assert_eq!(bind_text::<Friend>(text), Err(expected));
}

#[rstest]
#[case(
    r#"{"address": "nowhere"}"#,
    BindError::ExpectedObject { shape: "Address", found: ValueKind::String }
)]
#[case(
    r#"{"friends": {"name": "Ann"}}"#,
    BindError::ExpectedArray { shape: "Rec", field: "Friends", found: ValueKind::Object }
)]
#[case(
    r#"{"interests": "a,b"}"#,
    BindError::ExpectedArray { shape: "Rec", field: "Interests", found: ValueKind::String }
)]
#[case(
    r#"{"friends": [{"name": "Ann"}, 3]}"#,
    BindError::ExpectedObject { shape: "Friend", found: ValueKind::Number }
)]
#[case(
    r#"{"scores": [1, 300]}"#,
    BindError::Coerce {
        shape: "Rec",
        field: "Scores[1]".into(),
        source: CoerceError::OutOfRange { kind: PrimitiveKind::U8, value: 300.0 },
    }
)]
#[case(
    r#"{"friends": [{"age": "old"}]}"#,
    BindError::Coerce {
        shape: "Friend",
        field: "Age".into(),
        source: CoerceError::Unparsable { kind: PrimitiveKind::I32, text: "old".into() },
    }
)]
fn rec_mismatches(#[case] text: &str, #[case] expected: BindError) {
    assert_eq!(bind_text::<Rec>(text), Err(expected));
}

#[test]
fn non_object_root_is_rejected() {
    assert_eq!(
        bind::<Friend>(&Value::Array(vec![])),
        Err(BindError::ExpectedObject {
            shape: "Friend",
            found: ValueKind::Array
        })
    );
}

#[test]
fn missing_constructor_is_reported() {
    assert_eq!(
        bind_text::<Opaque>("{}").err(),
        Some(BindError::NoConstructor { shape: "Opaque" })
    );
}

#[test]
fn key_normalizer_is_swappable() {
    let exact = Binder::new(BinderOptions {
        key_normalizer: verbatim,
    });
    let value = parse(r#"{"age": 1, "Age": 2}"#).unwrap();
    let friend: Friend = exact.bind(&value).unwrap();
    assert_eq!(friend.age, 2);

    let shout = Binder::new(BinderOptions {
        key_normalizer: |key| key.to_uppercase().into(),
    });
    let friend: Friend = shout.bind(&parse(r#"{"age": 3}"#).unwrap()).unwrap();
    assert_eq!(friend.age, 0, "AGE matches no field");
}

#[test]
fn empty_object_yields_default_instance() {
    let rec: Rec = bind_text("{}").unwrap();
    assert_eq!(rec, Rec::default());
}

#[test]
fn errors_abort_without_partial_results() {
    // The name is valid, the age is not; no instance comes back at all.
    assert!(bind_text::<Friend>(r#"{"name": "A", "age": "x"}"#).is_err());
}
