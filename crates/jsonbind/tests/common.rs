#![allow(missing_docs, dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

pub const PROFILE: &str = r#"
{
    "name": "John",
    "age": 30,
    "isStudent": false,
    "address": {
        "street": "123 Main St",
        "city": "Anytown",
        "country": "USA"
    },
    "interests": ["Reading", "Hiking", "Photography"],
    "friends": [
        {"name": "Alice", "age": 28, "isStudent": true},
        {"name": "Bob", "age": 32, "isStudent": false}
    ],
    "metadata": {"source": "import", "tags": ["a", "b"]}
}
"#;

#[derive(Debug, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct Friend {
    pub name: String,
    pub age: i32,
    pub is_student: bool,
}

#[derive(Debug, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: i32,
    pub is_student: bool,
    pub address: Address,
    pub interests: Vec<String>,
    pub friends: Vec<Friend>,
}

jsonbind::shape! {
    Address {
        Street: string => street,
        City: string => city,
        Country: string => country,
    }
}

jsonbind::shape! {
    Friend {
        Name: string => name,
        Age: primitive => age,
        IsStudent: primitive => is_student,
    }
}

jsonbind::shape! {
    Profile {
        Name: string => name,
        Age: primitive => age,
        IsStudent: primitive => is_student,
        Address: nested => address,
        Interests: [string] => interests,
        Friends: [nested] => friends,
    }
}
