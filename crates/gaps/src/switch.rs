use crate::claim::declaration_builders;
use crate::claim::Declaration;
use crate::Claim;
use crate::Flag;
use crate::ParserError;
use crate::Result;

/// A boolean option that counts its occurrences, e.g. `-vvv`
///
/// A token following the flag is never taken as a value: the occurrence is
/// still counted and the token is left for positional use.
#[derive(Clone, Debug)]
pub struct FlagOption {
    decl: Declaration,
    count: usize,
}

impl FlagOption {
    /// Declare from one or two bare names, e.g. `["v", "verbose"]`
    ///
    /// # Panics
    ///
    /// When the names do not form a valid [`Flag`]
    #[track_caller]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            decl: Declaration::new(names),
            count: 0,
        }
    }

    declaration_builders!();

    /// Whether the flag occurred at all
    pub fn value(&self) -> bool {
        self.count > 0
    }

    /// How many times the flag occurred
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Claim for FlagOption {
    fn flag(&self) -> &Flag {
        &self.decl.flag
    }

    fn help(&self) -> Option<&str> {
        self.decl.help.as_deref()
    }

    fn is_required(&self) -> bool {
        self.decl.required
    }

    fn was_set(&self) -> bool {
        self.count > 0
    }

    fn claim_flag(&mut self) -> Result<()> {
        self.count += 1;
        Ok(())
    }

    fn claim_value(&mut self, argument: &str) -> Result<()> {
        self.count += 1;
        Err(ParserError::UnparsedArgument {
            argument: argument.to_owned(),
        })
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}
