//! Line preprocessing: comment stripping and indentation measurement.

/// One meaningful line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based physical line number.
    pub number: usize,
    /// Count of leading spaces.
    pub indent: usize,
    /// The line with leading spaces, comment and trailing whitespace removed.
    pub content: &'a str,
}

/// Split a document into meaningful lines.
///
/// Everything from the first `#` on a line is dropped. Quote state is not
/// tracked, so a `#` inside a quoted scalar also starts a comment:
/// `key: "a#b"` is read as `key: "a`. Lines that are empty after that are
/// skipped. Only spaces count toward indentation.
pub fn preprocess(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let code = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let code = code.trim_end();
            if code.trim().is_empty() {
                return None;
            }
            let content = code.trim_start_matches(' ');
            let indent = code.len() - content.len();
            if content.starts_with('\t') {
                tracing::warn!(line = idx + 1, "tab after indentation; tabs do not count as indent");
            }
            Some(Line {
                number: idx + 1,
                indent,
                content,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(usize, &str)> {
        preprocess(text)
            .into_iter()
            .map(|l| (l.indent, l.content))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(preprocess("").is_empty());
        assert!(preprocess("\n\n   \n").is_empty());
    }

    #[test]
    fn test_strips_comments_and_blank_lines() {
        let text = "# header\nproject:   # trailing\n\n  name: demo\n    # indented comment\n";
        assert_eq!(pairs(text), vec![(0, "project:"), (2, "name: demo")]);
    }

    #[test]
    fn test_line_numbers_count_dropped_lines() {
        let lines = preprocess("# c\n\na: 1\n\n  b: 2\n");
        let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![3, 5]);
    }

    #[test]
    fn test_tab_is_not_indentation() {
        let lines = preprocess("a:\n\tb: 1\n  \tc: 2\n");
        assert_eq!(lines[1].indent, 0);
        assert_eq!(lines[1].content, "\tb: 1");
        assert_eq!(lines[2].indent, 2);
        assert_eq!(lines[2].content, "\tc: 2");
    }

    #[test]
    fn test_tab_indented_key_lands_at_the_spaces_level() {
        let doc = crate::parse("a:\n\tb: 1\n").unwrap();
        assert_eq!(doc.get("a"), Some(&crate::Node::empty_mapping()));
        assert_eq!(doc.get("b"), Some(&crate::Node::from(1i64)));
    }

    #[test]
    fn test_hash_inside_quotes_starts_a_comment() {
        assert_eq!(pairs("key: \"a#b\""), vec![(0, "key: \"a")]);
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        assert_eq!(pairs("a: 1   \r\n  b: 2\t\r\n"), vec![(0, "a: 1"), (2, "b: 2")]);
    }
}
