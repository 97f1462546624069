//! Argument error types for use with gaps
//!
//! [`ParserError`] is the closed set of failures a parse cycle can end in;
//! [`FileOptionError`] covers deferred validation and access of file options.
//!
//! ## Example
//!
//! ```
//! use gaps_error::ParserError;
//!
//! let err = ParserError::InvalidValue {
//!     option: "-n, --number".to_owned(),
//!     argument: "ten".to_owned(),
//! };
//! assert_eq!(err.to_string(), "invalid value 'ten' for option '-n, --number'");
//! assert_eq!(ParserError::NoInput.message(), None);
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

mod file;

pub use file::FileOptionError;

/// `Result<T, ParserError>`
///
/// `gaps_error::Result` may be used with one *or* two type parameters.
///
/// ```rust
/// use gaps_error::Result;
///
/// # const IGNORE: &str = stringify! {
/// fn demo1() -> Result<T> {...}
///            // ^ equivalent to std::result::Result<T, gaps_error::ParserError>
///
/// fn demo2() -> Result<T, OtherError> {...}
///            // ^ equivalent to std::result::Result<T, OtherError>
/// # };
/// ```
pub type Result<T, E = ParserError> = std::result::Result<T, E>;

/// Why a parse cycle failed
///
/// Options are identified by their description: their flag forms joined by
/// `", "`, e.g. `-o, --output`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum ParserError {
    /// Nothing to parse; never printed
    NoInput,
    /// A required option never occurred
    MissingRequiredOption {
        /// Description of the option
        option: String,
    },
    /// An option occurred without the value it needs
    MissingRequiredValue {
        /// Description of the option
        option: String,
    },
    /// A claimed value could not be converted
    InvalidValue {
        /// Description of the option
        option: String,
        /// The rejected token
        argument: String,
    },
    /// A single-value option occurred more than once
    InvalidUse {
        /// Description of the option
        option: String,
    },
    /// A token no option claimed
    UnparsedArgument {
        /// The first leftover token
        argument: String,
    },
    /// A command name no command matched
    UnrecognizedCommand {
        /// The rejected command name
        command: String,
    },
}

impl ParserError {
    /// The user-facing message, `None` for [`ParserError::NoInput`]
    pub fn message(&self) -> Option<String> {
        let message = match self {
            Self::NoInput => return None,
            Self::MissingRequiredOption { option } => {
                format!("missing required option '{option}'")
            }
            Self::MissingRequiredValue { option } => {
                format!("option '{option}' requires a value")
            }
            Self::InvalidValue { option, argument } => {
                format!("invalid value '{argument}' for option '{option}'")
            }
            Self::InvalidUse { option } => format!("invalid use of '{option}'"),
            Self::UnparsedArgument { argument } => {
                if argument.starts_with('-') {
                    format!("unrecognized option '{argument}'")
                } else {
                    format!("unparsed argument '{argument}'")
                }
            }
            Self::UnrecognizedCommand { command } => {
                format!("unrecognized command '{command}'")
            }
        };
        Some(message)
    }

    /// Whether the claim engine may leave the rejected token for later
    ///
    /// Only an unparsed-argument rejection qualifies; everything else aborts
    /// the parse cycle.
    pub fn is_unparsed_argument(&self) -> bool {
        matches!(self, Self::UnparsedArgument { .. })
    }
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => message.fmt(formatter),
            None => formatter.write_str("no input"),
        }
    }
}

impl std::error::Error for ParserError {}
