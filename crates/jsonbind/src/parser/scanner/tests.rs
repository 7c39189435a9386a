use super::*;

fn separators(body: &str, seps: &[u8]) -> Result<Vec<usize>, ParseError> {
    let mut s = Scanner::new(body, "array");
    let mut found = Vec::new();
    while let Some(at) = s.next_top_level(seps)? {
        found.push(at);
    }
    Ok(found)
}

#[test]
fn commas_at_depth_zero_only() {
    let body = "1, [2, 3], 4";
    assert_eq!(separators(body, b",").unwrap(), vec![1, 9]);
}

#[test]
fn separators_inside_strings_are_ignored() {
    let body = r#""a,b", "c]d", "{""#;
    assert_eq!(separators(body, b",").unwrap(), vec![5, 12]);
}

#[test]
fn escaped_quote_does_not_close_string() {
    let body = r#""a\",b", 2"#;
    assert_eq!(separators(body, b",").unwrap(), vec![7]);
}

#[test]
fn escaped_backslash_before_quote_closes_string() {
    let body = r#""a\\", 2"#;
    assert_eq!(separators(body, b",").unwrap(), vec![5]);
}

#[test]
fn multiple_separator_kinds() {
    let body = r#""k": {"x": 1}, "j": 2"#;
    assert_eq!(separators(body, b":,").unwrap(), vec![3, 13, 18]);
}

#[test]
fn negative_depth_is_rejected() {
    assert_eq!(
        separators("1], 2", b","),
        Err(ParseError::UnexpectedClose(']'))
    );
    assert_eq!(separators("}", b","), Err(ParseError::UnexpectedClose('}')));
}

#[test]
fn unclosed_nesting_is_rejected() {
    assert_eq!(
        separators("[1, 2", b","),
        Err(ParseError::Unterminated("array"))
    );
}

#[test]
fn unclosed_string_is_rejected() {
    assert_eq!(
        separators(r#""abc, 1"#, b","),
        Err(ParseError::UnterminatedString)
    );
}

#[test]
fn multibyte_text_is_walked_bytewise() {
    let body = "\"π,é\", ß";
    // `"π,é"` occupies 7 bytes, so the top-level comma sits at index 7.
    assert_eq!(separators(body, b",").unwrap(), vec![7]);
}
