//! Token grammar for the `gaps` option parser
//!
//! This crate knows nothing about declared options.  It classifies raw tokens
//! (short flag, long flag, numeric-looking value, operands), declares option
//! [`Flag`]s and normalizes a raw argument list with [`expand`] so that every
//! flag occurrence becomes a standalone token.
//!
//! ## Example
//!
//! ```
//! let expanded = gaps_lexer::expand(["-vx", "--output=out.txt", "-3", "--", "-abc"]);
//! assert_eq!(
//!     expanded,
//!     ["-v", "-x", "--output", "out.txt", "-3", "--", "-abc"]
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod expand;
mod flag;

pub use expand::expand;
pub use flag::Flag;
pub use flag::FlagError;

/// Marks a single-character flag, e.g. `-v`
pub const SHORT_PREFIX: &str = "-";
/// Marks a multi-character flag, e.g. `--verbose`
pub const LONG_PREFIX: &str = "--";
/// Standalone token meaning "use the standard input/output stream"
pub const FILE_OPERAND: &str = "-";
/// Standalone token after which nothing is treated as an option
pub const STOP_OPERAND: &str = "--";
/// Joins a long flag with its value, e.g. `--output=out.txt`
pub const ASSIGNMENT: char = '=';

/// Whether every character is one of `0-9`, `.` or `-`
///
/// Loose: `--5`, `-.` and the empty string all qualify.  Only decides whether
/// a dash-prefixed token may be a value.
pub fn is_numerical(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}

/// Starts with [`SHORT_PREFIX`] (which includes every long flag)
pub fn has_short_prefix(token: &str) -> bool {
    token.starts_with(SHORT_PREFIX)
}

/// Starts with [`LONG_PREFIX`]
pub fn has_long_prefix(token: &str) -> bool {
    token.starts_with(LONG_PREFIX)
}

/// Whether a token ends a claim window
///
/// Numeric-looking tokens such as `-3` or `-0.5` are values, not options.
pub fn is_option(token: &str) -> bool {
    !is_numerical(token) && (has_short_prefix(token) || has_long_prefix(token))
}
