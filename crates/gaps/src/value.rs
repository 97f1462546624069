use crate::claim::declaration_builders;
use crate::claim::Declaration;
use crate::Claim;
use crate::Flag;
use crate::ParserError;
use crate::Result;

/// `--name VALUE`
pub type StringOption = ValueOption<String>;
/// `--count 3`
pub type IntegerOption = ValueOption<i64>;
/// `--ratio 0.5`
pub type DoubleOption = ValueOption<f64>;

/// An option holding a single value parsed with [`FromStr`][std::str::FromStr]
///
/// A second value in the same claim window is left unclaimed; a second
/// occurrence of the flag is an [`ParserError::InvalidUse`].
#[derive(Clone, Debug)]
pub struct ValueOption<T> {
    decl: Declaration,
    value: Option<T>,
    default: Option<T>,
    value_is_optional: bool,
    was_set: bool,
}

impl<T> ValueOption<T>
where
    T: std::str::FromStr + 'static,
{
    /// Declare from one or two bare names, e.g. `["o", "output"]`
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
            value: None,
            default: None,
            value_is_optional: false,
            was_set: false,
        }
    }

    declaration_builders!();

    /// Value reported when none was claimed
    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Accept the flag on its own instead of failing with
    /// [`ParserError::MissingRequiredValue`]
    pub fn value_is_optional(mut self, yes: bool) -> Self {
        self.value_is_optional = yes;
        self
    }

    /// The claimed value, else the default
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref().or(self.default.as_ref())
    }
}

impl<T> Claim for ValueOption<T>
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
        self.was_set
    }

    fn is_single_value(&self) -> bool {
        true
    }

    fn claim_flag(&mut self) -> Result<()> {
        if !self.value_is_optional {
            return Err(ParserError::MissingRequiredValue {
                option: self.description(),
            });
        }
        self.was_set = true;
        Ok(())
    }

    fn claim_value(&mut self, argument: &str) -> Result<()> {
        if self.value.is_some() {
            return Err(ParserError::UnparsedArgument {
                argument: argument.to_owned(),
            });
        }
        let value = argument
            .parse()
            .map_err(|_err| ParserError::InvalidValue {
                option: self.description(),
                argument: argument.to_owned(),
            })?;
        self.value = Some(value);
        self.was_set = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.value = None;
        self.was_set = false;
    }
}

/// An enum whose variants are chosen by name on the command line
///
/// ```
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// enum Color {
///     Auto,
///     Always,
///     Never,
/// }
///
/// impl gaps::ArgEnum for Color {
///     const VARIANTS: &'static [Self] = &[Self::Auto, Self::Always, Self::Never];
///
///     fn as_arg(&self) -> &'static str {
///         match self {
///             Self::Auto => "auto",
///             Self::Always => "always",
///             Self::Never => "never",
///         }
///     }
/// }
/// ```
pub trait ArgEnum: Copy + 'static {
    /// Every selectable variant
    const VARIANTS: &'static [Self];

    /// The name selecting this variant
    fn as_arg(&self) -> &'static str;

    /// The variant named `arg`, if any
    fn from_arg(arg: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_arg() == arg)
    }
}

/// An option selecting one [`ArgEnum`] variant by name
#[derive(Clone, Debug)]
pub struct EnumOption<E> {
    decl: Declaration,
    value: Option<E>,
    default: Option<E>,
    was_set: bool,
}

impl<E: ArgEnum> EnumOption<E> {
    /// Declare from one or two bare names, e.g. `["color"]`
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
            value: None,
            default: None,
            was_set: false,
        }
    }

    declaration_builders!();

    /// Variant reported when none was claimed
    pub fn default_value(mut self, value: E) -> Self {
        self.default = Some(value);
        self
    }

    /// The claimed variant, else the default
    pub fn value(&self) -> Option<E> {
        self.value.or(self.default)
    }
}

impl<E: ArgEnum> Claim for EnumOption<E> {
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
        self.was_set
    }

    fn is_single_value(&self) -> bool {
        true
    }

    fn claim_flag(&mut self) -> Result<()> {
        Err(ParserError::MissingRequiredValue {
            option: self.description(),
        })
    }

    fn claim_value(&mut self, argument: &str) -> Result<()> {
        if self.value.is_some() {
            return Err(ParserError::UnparsedArgument {
                argument: argument.to_owned(),
            });
        }
        let value = E::from_arg(argument).ok_or_else(|| ParserError::InvalidValue {
            option: self.description(),
            argument: argument.to_owned(),
        })?;
        self.value = Some(value);
        self.was_set = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.value = None;
        self.was_set = false;
    }
}
