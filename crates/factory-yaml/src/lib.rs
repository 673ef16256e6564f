//! # factory-yaml
//!
//! Parser for the constrained, indentation-sensitive YAML subset that
//! Content Factory configuration files are written in.
//!
//! ## Supported syntax
//!
//! - `key: value` mappings and `key:` followed by an indented block
//! - `- item` sequences (scalars, `- key: value` items with aligned
//!   continuation keys, or nested blocks)
//! - inline literals such as `[1, 2, 3]` and `{'a': 1}`
//! - quoted strings (quotes stripped, no escape processing), booleans
//!   (`true`/`yes`/`false`/`no`), null (`null`/`none`/`~`) and numbers
//! - `#` comments
//!
//! Anchors, aliases, multi-document streams and block scalars are not
//! supported. Comment detection does not track quotes, so `#` always starts
//! a comment, even inside a quoted value.
//!
//! ## Example
//!
//! ```rust
//! use factory_yaml::{Node, parse};
//!
//! let doc = parse(
//!     r#"
//! audio:
//!   engines:
//!     edge-tts:
//!       voice: ru-RU-SvetlanaNeural
//!       speed: 1.0
//! "#,
//! )
//! .unwrap();
//!
//! let speed = doc.get_path(&["audio", "engines", "edge-tts", "speed"]);
//! assert_eq!(speed, Some(&Node::from(1.0)));
//! ```

mod error;
mod lines;
mod literal;
mod node;
mod parser;
mod scalar;

pub use error::{Error, Result};
pub use lines::{Line, preprocess};
pub use node::{Mapping, Node, Scalar};
pub use parser::{MAX_DEPTH, parse, parse_lines};
pub use scalar::coerce;
