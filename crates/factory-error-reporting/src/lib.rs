//! Structured diagnostics for Content Factory tools.
//!
//! A [`DiagnosticMessage`] carries a title, an optional error code from the
//! [catalog](catalog), a problem statement, bulleted details and hints, and
//! optionally a [`SourceLocation`] pointing into a configuration file. It
//! renders as plain text (with an `ariadne` source snippet when the file text
//! is supplied) or as JSON.
//!
//! ```
//! use factory_error_reporting::{DiagnosticMessageBuilder, SourceLocation};
//!
//! let msg = DiagnosticMessageBuilder::error("Invalid indentation")
//!     .with_code("CF-1-1")
//!     .problem("Lines in a block must share the block's indentation")
//!     .with_location(SourceLocation::new("projects/leo/config.yaml", 3))
//!     .add_hint("Align the line with its siblings?")
//!     .build();
//!
//! let text = msg.to_text(None);
//! assert!(text.starts_with("Error [CF-1-1]: Invalid indentation"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;
pub mod source;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info, get_subsystem};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
pub use source::SourceLocation;
