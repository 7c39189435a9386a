use std::borrow::Cow;

/// Maps a JSON object key to the field identifier the binder looks up.
pub type KeyNormalizer = fn(&str) -> Cow<'_, str>;

/// Configuration options for the value parser.
///
/// # Examples
///
/// ```rust
/// use jsonbind::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions {
///     allow_tab_whitespace: true,
/// });
/// assert_eq!(parser.parse("[\t1]").unwrap(), Value::Array(vec![Value::Number(1.0)]));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether horizontal tab (U+0009) counts as whitespace between tokens.
    ///
    /// By default only space (U+0020), line feed (U+000A), and carriage
    /// return (U+000D) are skipped, so a tab outside a string literal makes
    /// the surrounding token invalid.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_tab_whitespace: bool,
}

impl ParserOptions {
    pub(crate) fn is_whitespace(self, c: char) -> bool {
        matches!(c, ' ' | '\r' | '\n') || (self.allow_tab_whitespace && c == '\t')
    }
}

/// Configuration options for the structural binder.
#[derive(Debug, Clone, Copy)]
pub struct BinderOptions {
    /// Turns an object key into a field identifier before lookup.
    ///
    /// # Default
    ///
    /// [`capitalize_first`]
    pub key_normalizer: KeyNormalizer,
}

impl Default for BinderOptions {
    fn default() -> Self {
        Self {
            key_normalizer: capitalize_first,
        }
    }
}

/// Upper-cases the first character of `key` and leaves the rest unchanged.
///
/// The full Unicode upper-case mapping applies, so a first character may
/// expand: `"ßtraße"` becomes `"SStraße"`.
///
/// ```
/// use jsonbind::capitalize_first;
///
/// assert_eq!(capitalize_first("isStudent"), "IsStudent");
/// assert_eq!(capitalize_first("Name"), "Name");
/// assert_eq!(capitalize_first("ßtraße"), "SStraße");
/// assert_eq!(capitalize_first(""), "");
/// ```
#[must_use]
pub fn capitalize_first(key: &str) -> Cow<'_, str> {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if !first.to_uppercase().eq(core::iter::once(first)) => {
            let mut out = String::with_capacity(key.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(key),
    }
}

/// Uses the key as the field identifier unchanged.
#[must_use]
pub fn verbatim(key: &str) -> Cow<'_, str> {
    Cow::Borrowed(key)
}
