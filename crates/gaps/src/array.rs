use crate::claim::declaration_builders;
use crate::claim::Declaration;
use crate::Claim;
use crate::Flag;
use crate::ParserError;
use crate::Result;

/// An option collecting every value in its claim windows, e.g.
/// `--include a b --include c`
#[derive(Clone, Debug)]
pub struct ArrayOption<T> {
    decl: Declaration,
    values: Option<Vec<T>>,
    default: Option<Vec<T>>,
    value_is_optional: bool,
}

impl<T> ArrayOption<T>
where
    T: std::str::FromStr + 'static,
{
    /// Declare from one or two bare names, e.g. `["I", "include"]`
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
            values: None,
            default: None,
            value_is_optional: false,
        }
    }

    declaration_builders!();

    /// Values reported when none were claimed
    pub fn default_value(mut self, values: Vec<T>) -> Self {
        self.default = Some(values);
        self
    }

    /// Accept the flag on its own, clearing anything collected so far
    pub fn value_is_optional(mut self, yes: bool) -> Self {
        self.value_is_optional = yes;
        self
    }

    /// The claimed values, else the default
    pub fn value(&self) -> Option<&[T]> {
        self.values.as_deref().or(self.default.as_deref())
    }
}

impl<T> Claim for ArrayOption<T>
where
    T: std::str::FromStr + 'static,
{
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
        self.values.is_some()
    }

    fn claim_flag(&mut self) -> Result<()> {
        if !self.value_is_optional {
            return Err(ParserError::MissingRequiredValue {
                option: self.description(),
            });
        }
        self.values = Some(Vec::new());
        Ok(())
    }

    fn claim_value(&mut self, argument: &str) -> Result<()> {
        let value = argument
            .parse()
            .map_err(|_err| ParserError::InvalidValue {
                option: self.description(),
                argument: argument.to_owned(),
            })?;
        self.values.get_or_insert_with(Vec::new).push(value);
        Ok(())
    }

    fn reset(&mut self) {
        self.values = None;
    }
}
