#![no_main]

use arbitrary::Arbitrary;
use jsonbind::{Binder, BinderOptions, Parser, ParserOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    allow_tab_whitespace: bool,
    verbatim_keys: bool,
    text: &'a str,
}

#[allow(dead_code)]
#[derive(Debug, Default)]
struct Tree {
    id: i64,
    label: String,
    flag: bool,
    tags: Vec<String>,
    weights: Vec<u8>,
    children: Vec<Tree>,
}

jsonbind::shape! {
    Tree {
        Id: primitive => id,
        Label: string => label,
        Flag: primitive => flag,
        Tags: [string] => tags,
        Weights: [primitive] => weights,
        Children: [nested] => children,
    }
}

fn run(input: &Input<'_>) {
    let parser = Parser::new(ParserOptions {
        allow_tab_whitespace: input.allow_tab_whitespace,
    });
    let parsed = parser.parse(input.text);

    // Same input, same outcome.
    assert_eq!(parsed, parser.parse(input.text));

    // Allowing tabs only ever accepts more, and never changes an accepted tree.
    if let Ok(strict) = jsonbind::parse(input.text) {
        let relaxed = Parser::new(ParserOptions {
            allow_tab_whitespace: true,
        })
        .parse(input.text);
        assert_eq!(relaxed.as_ref(), Ok(&strict));
    }

    if let Ok(value) = parsed {
        let binder = if input.verbatim_keys {
            Binder::new(BinderOptions {
                key_normalizer: jsonbind::verbatim,
            })
        } else {
            Binder::default()
        };
        let _ = binder.bind::<Tree>(&value);
    }
}

fuzz_target!(|input: Input<'_>| run(&input));
