//! Indentation-driven block parser.

use crate::lines::{Line, preprocess};
use std::cell::Cell;
use crate::node::{Mapping, Node};
use crate::scalar::coerce;
use crate::{Error, Result};

/// Parse a document into a tree.
///
/// The root is a sequence when the first line starts with `-`, and a mapping
/// otherwise. An empty document (or one holding only comments) parses to an
/// empty mapping.
///
/// # Example
///
/// ```rust
/// use factory_yaml::{Node, parse};
///
/// let doc = parse("project:\n  name: demo\n").unwrap();
/// assert_eq!(doc.get_path(&["project", "name"]), Some(&Node::from("demo")));
/// ```
///
/// # Errors
///
/// Returns an error on inconsistent indentation, on a `- item` line where a
/// mapping key was expected, on a mapping line without `:`, and on blocks
/// nested more than [`MAX_DEPTH`] levels deep.
pub fn parse(text: &str) -> Result<Node> {
    let lines = preprocess(text);
    parse_lines(&lines)
}

/// Parse already-preprocessed lines.
pub fn parse_lines(lines: &[Line<'_>]) -> Result<Node> {
    let parser = BlockParser {
        lines,
        depth: Cell::new(0),
    };
    let (node, end) = parser.parse_block(0, 0)?;

    // A top-level sequence stops at the first non-dash line; nothing may follow it.
    if let Some(line) = lines.get(end) {
        return Err(Error::ExpectedListItem {
            line: line.number,
            content: line.content.to_string(),
        });
    }

    tracing::debug!(lines = lines.len(), root = node.kind_name(), "parsed document");
    Ok(node)
}

/// Deepest block nesting accepted below the root.
pub const MAX_DEPTH: usize = 128;

/// Which container a block opens, decided by its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Sequence,
    Mapping,
}

struct BlockParser<'a> {
    lines: &'a [Line<'a>],
    depth: Cell<usize>,
}

impl BlockParser<'_> {
    fn block_kind(&self, start: usize, indent: usize) -> BlockKind {
        match self.lines.get(start) {
            Some(line) if line.indent >= indent && line.content.starts_with('-') => {
                BlockKind::Sequence
            }
            _ => BlockKind::Mapping,
        }
    }

    /// Parse the block of lines at `indent` beginning at `start`.
    ///
    /// Returns the container and the index of the first line after it.
    fn parse_block(&self, start: usize, indent: usize) -> Result<(Node, usize)> {
        match self.block_kind(start, indent) {
            BlockKind::Sequence => self.parse_sequence(start, indent),
            BlockKind::Mapping => self.parse_mapping(start, indent),
        }
    }

    /// Parse the block nested under the line at `idx`, if the next line is
    /// indented deeper than `parent_indent`.
    fn parse_nested(&self, idx: usize, parent_indent: usize) -> Result<Option<(Node, usize)>> {
        match self.lines.get(idx + 1) {
            Some(next) if next.indent > parent_indent => {
                let depth = self.depth.get();
                if depth >= MAX_DEPTH {
                    return Err(Error::NestingTooDeep {
                        line: next.number,
                        limit: MAX_DEPTH,
                    });
                }
                self.depth.set(depth + 1);
                let nested = self.parse_block(idx + 1, next.indent).map(Some);
                self.depth.set(depth);
                nested
            }
            _ => Ok(None),
        }
    }

    fn parse_mapping(&self, start: usize, indent: usize) -> Result<(Node, usize)> {
        let mut map = Mapping::new();
        let mut idx = start;

        while let Some(line) = self.lines.get(idx) {
            if line.indent < indent {
                break;
            }
            if line.indent > indent {
                return Err(invalid_indentation(line, indent));
            }
            if line.content.starts_with('-') {
                return Err(Error::ListItemWithoutKey {
                    line: line.number,
                    indent,
                    content: line.content.to_string(),
                });
            }
            let Some((key, rest)) = line.content.split_once(':') else {
                return Err(Error::InvalidMappingEntry {
                    line: line.number,
                    content: line.content.to_string(),
                });
            };
            let key = key.trim().to_string();
            let rest = rest.trim();

            if !rest.is_empty() {
                map.insert(key, coerce(rest));
                idx += 1;
                continue;
            }

            match self.parse_nested(idx, line.indent)? {
                Some((value, next)) => {
                    map.insert(key, value);
                    idx = next;
                }
                None => {
                    map.insert(key, Node::empty_mapping());
                    idx += 1;
                }
            }
        }

        Ok((Node::Mapping(map), idx))
    }

    fn parse_sequence(&self, start: usize, indent: usize) -> Result<(Node, usize)> {
        let mut items = Vec::new();
        let mut idx = start;

        while let Some(line) = self.lines.get(idx) {
            if line.indent < indent {
                break;
            }
            if line.indent > indent {
                return Err(invalid_indentation(line, indent));
            }
            let Some(after_dash) = line.content.strip_prefix('-') else {
                break;
            };
            let item = after_dash.trim_start_matches(' ');
            // Column where the item's own content starts, e.g. 4 for "  - title: x".
            let column = line.indent + (line.content.len() - item.len());

            if item.is_empty() {
                match self.parse_nested(idx, line.indent)? {
                    Some((value, next)) => {
                        items.push(value);
                        idx = next;
                    }
                    None => {
                        items.push(Node::null());
                        idx += 1;
                    }
                }
                continue;
            }

            let Some((key, rest)) = item.split_once(':') else {
                items.push(coerce(item));
                idx += 1;
                continue;
            };

            let key = key.trim().to_string();
            let rest = rest.trim();
            let mut entry = Mapping::new();
            if !rest.is_empty() {
                entry.insert(key, coerce(rest));
                idx += 1;
            } else {
                match self.parse_nested(idx, line.indent)? {
                    Some((value, next)) => {
                        entry.insert(key, value);
                        idx = next;
                    }
                    None => {
                        entry.insert(key, Node::empty_mapping());
                        idx += 1;
                    }
                }
            }
            idx = self.continue_item(&mut entry, idx, column)?;
            items.push(Node::Mapping(entry));
        }

        Ok((Node::Sequence(items), idx))
    }

    /// Fold lines aligned with a `- key: value` item's content column into that item.
    fn continue_item(&self, entry: &mut Mapping, idx: usize, column: usize) -> Result<usize> {
        match self.lines.get(idx) {
            Some(next) if next.indent == column => {
                let (rest, end) = self.parse_mapping(idx, column)?;
                if let Node::Mapping(more) = rest {
                    entry.extend(more);
                }
                Ok(end)
            }
            _ => Ok(idx),
        }
    }
}

fn invalid_indentation(line: &Line<'_>, expected: usize) -> Error {
    Error::InvalidIndentation {
        line: line.number,
        expected,
        found: line.indent,
        content: line.content.to_string(),
    }
}
