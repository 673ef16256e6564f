//! Scalar coercion for leaf tokens.

use crate::literal::parse_literal;
use crate::node::{Node, Scalar};
use std::borrow::Cow;

/// Coerce a raw token into a typed value.
///
/// Rules are tried in order and the first match wins:
///
/// 1. empty → `""`
/// 2. `true`/`yes` and `false`/`no` (any case) → booleans
/// 3. `null`/`none`/`~` (any case) → null
/// 4. a number: float when the token contains `.`, integer otherwise;
///    `_` is allowed between digits (`1_000`)
/// 5. `[...]` or `{...}` → inline literal, or the plain text if it doesn't parse
/// 6. `'...'` or `"..."` → the text between the quotes, verbatim
/// 7. anything else → the trimmed text
///
/// Numbers come before brackets and quotes, so `123` is always an integer
/// and `"123"` (quoted) is always a string.
pub fn coerce(raw: &str) -> Node {
    let v = raw.trim();
    if v.is_empty() {
        return Node::string("");
    }

    let lower = v.to_lowercase();
    match lower.as_str() {
        "true" | "yes" => return Node::from(true),
        "false" | "no" => return Node::from(false),
        "null" | "none" | "~" => return Node::null(),
        _ => {}
    }

    if let Some(number) = parse_number(v) {
        return Node::Scalar(number);
    }

    if is_bracketed(v) {
        return parse_literal(v).unwrap_or_else(|| Node::string(v));
    }

    if let Some(inner) = strip_quotes(v) {
        return Node::string(inner);
    }

    Node::string(v)
}

fn parse_number(v: &str) -> Option<Scalar> {
    let v = without_digit_separators(v)?;
    if v.contains('.') {
        v.parse::<f64>().ok().map(Scalar::Float)
    } else {
        v.parse::<i64>().ok().map(Scalar::Int)
    }
}

/// Drop `_` separators, each of which must sit between two digits.
fn without_digit_separators(v: &str) -> Option<Cow<'_, str>> {
    if !v.contains('_') {
        return Some(Cow::Borrowed(v));
    }
    let bytes = v.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    separated.then(|| Cow::Owned(v.replace('_', "")))
}

fn is_bracketed(v: &str) -> bool {
    (v.starts_with('[') && v.ends_with(']')) || (v.starts_with('{') && v.ends_with('}'))
}

fn strip_quotes(v: &str) -> Option<&str> {
    if v.len() < 2 {
        return None;
    }
    let quoted = (v.starts_with('"') && v.ends_with('"')) || (v.starts_with('\'') && v.ends_with('\''));
    quoted.then(|| &v[1..v.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_table() {
        assert_eq!(coerce("true"), Node::from(true));
        assert_eq!(coerce("No"), Node::from(false));
        assert_eq!(coerce("YES"), Node::from(true));
        assert_eq!(coerce("null"), Node::null());
        assert_eq!(coerce("None"), Node::null());
        assert_eq!(coerce("~"), Node::null());
        assert_eq!(coerce("3"), Node::from(3i64));
        assert_eq!(coerce("-42"), Node::from(-42i64));
        assert_eq!(coerce("3.5"), Node::from(3.5));
        assert_eq!(coerce("1.0"), Node::from(1.0));
        assert_eq!(
            coerce("[1, 2, 3]"),
            Node::Sequence(vec![1i64.into(), 2i64.into(), 3i64.into()])
        );
        assert_eq!(coerce("'hello'"), Node::from("hello"));
        assert_eq!(coerce("\"0:00\""), Node::from("0:00"));
        assert_eq!(coerce("plain text"), Node::from("plain text"));
        assert_eq!(coerce(""), Node::from(""));
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(coerce("1_000"), Node::from(1000i64));
        assert_eq!(coerce("-2_500_000"), Node::from(-2_500_000i64));
        assert_eq!(coerce("1_000.5"), Node::from(1000.5));
        assert_eq!(coerce("1__000"), Node::from("1__000"));
        assert_eq!(coerce("_100"), Node::from("_100"));
        assert_eq!(coerce("100_"), Node::from("100_"));
        assert_eq!(coerce("1_.5"), Node::from("1_.5"));
        assert_eq!(coerce("retry_delay"), Node::from("retry_delay"));
    }

    #[test]
    fn test_deeply_nested_literal_is_plain_string() {
        let text = format!("{}{}", "[".repeat(20_000), "]".repeat(20_000));
        assert_eq!(coerce(&text), Node::string(text.clone()));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(coerce("  7  "), Node::from(7i64));
        assert_eq!(coerce("  ru-RU  "), Node::from("ru-RU"));
    }

    #[test]
    fn test_quoted_numbers_stay_strings() {
        assert_eq!(coerce("\"123\""), Node::from("123"));
        assert_eq!(coerce("'true'"), Node::from("true"));
    }

    #[test]
    fn test_quotes_are_stripped_verbatim() {
        assert_eq!(coerce(r#""a\nb""#), Node::from(r"a\nb"));
        assert_eq!(coerce("\""), Node::from("\""));
    }

    #[test]
    fn test_number_without_dot_is_not_float() {
        // Exponent-only forms aren't integers and have no dot, so they stay text.
        assert_eq!(coerce("1e5"), Node::from("1e5"));
        assert_eq!(coerce("1.2.3"), Node::from("1.2.3"));
    }

    #[test]
    fn test_integer_overflow_falls_through_to_string() {
        assert_eq!(
            coerce("99999999999999999999"),
            Node::from("99999999999999999999")
        );
    }

    #[test]
    fn test_unparseable_literal_is_plain_string() {
        assert_eq!(coerce("[a, b]"), Node::from("[a, b]"));
        assert_eq!(coerce("{not: literal}"), Node::from("{not: literal}"));
    }

    #[test]
    fn test_inline_dict() {
        let node = coerce("{'lang': 'ru', 'voices': 2}");
        let map = node.as_mapping().unwrap();
        assert_eq!(map.get("lang"), Some(&Node::from("ru")));
        assert_eq!(map.get("voices"), Some(&Node::from(2i64)));
    }
}
