use crate::Flag;
use crate::Result;

/// A declared, typed option the parser distributes tokens to
///
/// The parser drives every implementation through the same protocol:
/// [`Claim::reset`] at the start of each parse cycle, then for every
/// occurrence of the option's [`Flag`] either [`Claim::claim_flag`] (nothing
/// follows the occurrence) or [`Claim::claim_value`] for each following
/// non-option token, in order.
///
/// Rejecting a token with [`ParserError::UnparsedArgument`][crate::ParserError::UnparsedArgument]
/// leaves it (and the rest of the window) unclaimed; any other error aborts the parse.
pub trait Claim: AsAny {
    /// The names this option answers to
    fn flag(&self) -> &Flag;

    /// Text listed next to the flag in usage; unlisted when `None`
    fn help(&self) -> Option<&str>;

    /// Whether a parse fails when this option never occurs
    fn is_required(&self) -> bool;

    /// Whether the option claimed anything since the last [`Claim::reset`]
    fn was_set(&self) -> bool;

    /// Whether a second occurrence is an error
    fn is_single_value(&self) -> bool {
        false
    }

    /// The option occurred with no value following it
    fn claim_flag(&mut self) -> Result<()>;

    /// Offer the option one token from its claim window
    fn claim_value(&mut self, argument: &str) -> Result<()>;

    /// Restore the declaration-time state
    fn reset(&mut self);

    /// How errors and usage refer to this option, e.g. `-o, --output`
    fn description(&self) -> String {
        self.flag().to_string()
    }
}

/// Recover the concrete option type behind a `dyn` [`Claim`]
#[doc(hidden)]
pub trait AsAny: std::any::Any {
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

impl<T: std::any::Any> AsAny for T {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// What every option variant is declared with
#[derive(Clone, Debug)]
pub(crate) struct Declaration {
    pub(crate) flag: Flag,
    pub(crate) help: Option<String>,
    pub(crate) required: bool,
}

impl Declaration {
    #[track_caller]
    pub(crate) fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            flag: Flag::new(names),
            help: None,
            required: false,
        }
    }
}

/// Builder methods shared by every option variant
macro_rules! declaration_builders {
    () => {
        /// Text listed next to the flag in usage
        pub fn help(mut self, help: impl Into<String>) -> Self {
            self.decl.help = Some(help.into());
            self
        }

        /// Fail the parse when this option never occurs
        pub fn required(mut self, yes: bool) -> Self {
            self.decl.required = yes;
            self
        }
    };
}

pub(crate) use declaration_builders;
