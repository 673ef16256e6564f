//! Inline literals: `[1, 'two', 3.0]`, `{'key': [True, None]}`.
//!
//! The accepted syntax is JSON-like: lists, dicts, single- or double-quoted
//! strings with backslash escapes, integers, floats, and the keywords
//! `True`/`False`/`None` (also `true`/`false`/`null`).
//! Dict keys must be strings or numbers; numeric keys are stored in their
//! textual form. Anything else makes the whole literal fail to parse, as does
//! nesting brackets more than [`MAX_LITERAL_DEPTH`] levels deep.

use crate::node::{Mapping, Node, Scalar};

pub(crate) const MAX_LITERAL_DEPTH: usize = 64;

/// Parse `text` as a single inline literal. Returns `None` if it is not one.
pub(crate) fn parse_literal(text: &str) -> Option<Node> {
    let mut reader = Reader::new(text);
    let node = reader.value()?;
    reader.skip_ws();
    if reader.at_end() { Some(node) } else { None }
}

struct Reader<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Reader {
            text,
            pos: 0,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Option<Node> {
        self.skip_ws();
        match self.peek()? {
            '[' => self.nested(Self::list),
            '{' => self.nested(Self::dict),
            '\'' | '"' => self.string().map(Node::string),
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                self.number().map(Node::Scalar)
            }
            c if c.is_alphabetic() => self.keyword(),
            _ => None,
        }
    }

    fn nested(&mut self, container: fn(&mut Self) -> Option<Node>) -> Option<Node> {
        if self.depth >= MAX_LITERAL_DEPTH {
            return None;
        }
        self.depth += 1;
        let node = container(self);
        self.depth -= 1;
        node
    }

    fn list(&mut self) -> Option<Node> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.eat(']') {
                return Some(Node::Sequence(items));
            }
            items.push(self.value()?);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.skip_ws();
            return if self.eat(']') {
                Some(Node::Sequence(items))
            } else {
                None
            };
        }
    }

    fn dict(&mut self) -> Option<Node> {
        self.bump();
        let mut map = Mapping::new();
        loop {
            self.skip_ws();
            if self.eat('}') {
                return Some(Node::Mapping(map));
            }
            let key = match self.value()? {
                Node::Scalar(Scalar::String(s)) => s,
                Node::Scalar(scalar @ (Scalar::Int(_) | Scalar::Float(_))) => scalar.to_string(),
                _ => return None,
            };
            self.skip_ws();
            if !self.eat(':') {
                return None;
            }
            let value = self.value()?;
            map.insert(key, value);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.skip_ws();
            return if self.eat('}') {
                Some(Node::Mapping(map))
            } else {
                None
            };
        }
    }

    fn string(&mut self) -> Option<String> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                c if c == quote => return Some(out),
                '\\' => out.push(self.escape()?),
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Option<char> {
        let c = match self.bump()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            'u' => {
                let hex = self.rest().get(..4)?;
                let code = u32::from_str_radix(hex, 16).ok()?;
                self.pos += 4;
                char::from_u32(code)?
            }
            c @ ('\\' | '\'' | '"' | '/') => c,
            _ => return None,
        };
        Some(c)
    }

    fn number(&mut self) -> Option<Scalar> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' || c == '+')
        {
            // A sign is only part of the number right after an exponent marker.
            if matches!(self.peek(), Some('-' | '+'))
                && !matches!(self.text[..self.pos].chars().last(), Some('e' | 'E'))
            {
                break;
            }
            self.bump();
        }
        let token: String = self.text[start..self.pos].chars().filter(|c| *c != '_').collect();
        let is_float = token.contains(['.', 'e', 'E']);
        if is_float {
            token.parse::<f64>().ok().filter(|f| f.is_finite()).map(Scalar::Float)
        } else {
            token.parse::<i64>().ok().map(Scalar::Int)
        }
    }

    fn keyword(&mut self) -> Option<Node> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        let scalar = match &self.text[start..self.pos] {
            "True" | "true" => Scalar::Bool(true),
            "False" | "false" => Scalar::Bool(false),
            "None" | "null" => Scalar::Null,
            _ => return None,
        };
        Some(Node::Scalar(scalar))
    }
}
