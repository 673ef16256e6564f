//! Subcommand implementations.
//!
//! Each command writes its normal output to the given writer and returns
//! errors to `main`, which renders them.

pub mod check;
pub mod get;
pub mod parse;
pub mod show;
