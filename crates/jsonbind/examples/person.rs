//! Binds a small `Person` record from JSON text and prints it.
//!
//! The document mixes key casings (`name`, `Age`, `isStudent`); all of them
//! reach their fields because keys are matched after upper-casing their first
//! character. A second, malformed document shows how failures are reported.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=jsonbind=trace cargo run -p jsonbind --example person
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use jsonbind::deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Person {
    name: String,
    age: i32,
    is_student: bool,
}

jsonbind::shape! {
    Person {
        Name: string => name,
        Age: primitive => age,
        IsStudent: primitive => is_student,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let documents = [
        r#"{"name": "Alice", "Age": 25, "isStudent": false, "nickname": "Al"}"#,
        r#"{"name": "Bob", "age": "twenty"}"#,
    ];

    for text in documents {
        match deserialize::<Person>(text) {
            Ok(person) => {
                info!(?person, "bound");
                println!("Name: {}", person.name);
                println!("Age: {}", person.age);
                println!("Is Student: {}", person.is_student);
            }
            Err(e) => error!(error = %e, "could not bind person"),
        }
    }
}
