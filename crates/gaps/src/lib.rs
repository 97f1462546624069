//! Declarative, typed command-line option parser
//!
//! Declare typed options, register them with an [`OptionParser`] and let it
//! distribute the command line between them.  Whatever no option claims is
//! reported as [unparsed arguments][OptionParser::unparsed_arguments].
//!
//! The grammar:
//! - `-v` and `--verbose` are flags; `-abc` is `-a -b -c`
//! - `--output=out.txt` is `--output out.txt`
//! - a flag claims the following tokens up to the next flag, so
//!   `--include a b --verbose` gives `--include` both `a` and `b`
//! - numeric-looking tokens such as `-3` are values, never flags
//! - `-` is a value (conventionally stdin/stdout)
//! - everything after `--` is left unparsed
//!
//! ## Example
//!
//! ```no_run
#![doc = include_str!("../examples/greet.rs")]
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

mod array;
mod claim;
mod command;
mod file;
mod parser;
mod switch;
mod usage;
mod value;

pub use array::ArrayOption;
#[doc(hidden)]
pub use claim::AsAny;
pub use claim::Claim;
pub use command::Command;
pub use command::CommandError;
pub use command::CommandParser;
pub use command::Selected;
pub use file::FileForReadingOption;
pub use file::FileForWritingOption;
pub use parser::OptionParser;
pub use parser::Setting;
pub use parser::Slot;
pub use switch::FlagOption;
pub use value::ArgEnum;
pub use value::DoubleOption;
pub use value::EnumOption;
pub use value::IntegerOption;
pub use value::StringOption;
pub use value::ValueOption;

pub use gaps_error::FileOptionError;
pub use gaps_error::ParserError;
pub use gaps_error::Result;
pub use gaps_lexer::expand;
pub use gaps_lexer::Flag;
pub use gaps_lexer::FlagError;
pub use gaps_lexer::FILE_OPERAND;
pub use gaps_lexer::LONG_PREFIX;
pub use gaps_lexer::SHORT_PREFIX;
pub use gaps_lexer::STOP_OPERAND;

const ERROR: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red)));
