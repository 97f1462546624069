use std::marker::PhantomData;

use crate::claim::AsAny as _;
use crate::Claim;
use crate::ParserError;
use crate::Result;
use crate::ERROR;
use crate::STOP_OPERAND;

/// Adjusts how [`OptionParser`] reports and tolerates input
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Setting {
    /// Leftover tokens are reported through [`OptionParser::unparsed_arguments`]
    /// instead of failing with [`ParserError::UnparsedArgument`]
    AllowUnparsedOptions,
    /// Empty input is not a [`ParserError::NoInput`] failure
    IgnoreNoInput,
    /// Single-value options may occur more than once; later values are left over
    IgnoreSingleValue,
    /// Return errors to the caller instead of printing usage and exiting
    ThrowsErrors,
}

/// Typed handle to an option registered with [`OptionParser::option`]
///
/// Index the parser with it to read the option back:
/// `parser[slot].value()`.
#[derive(Debug)]
pub struct Slot<C> {
    index: usize,
    marker: PhantomData<fn() -> C>,
}

impl<C> Clone for Slot<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Slot<C> {}

/// Distributes command-line tokens to declared options
///
/// ```
/// use gaps::{FlagOption, OptionParser, Setting, StringOption};
///
/// let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
/// let name = parser.option(StringOption::new(["n", "name"]).required(true));
/// let verbose = parser.option(FlagOption::new(["v"]));
///
/// parser.parse_from(["greet", "-vv", "--name=World"], 1).unwrap();
/// assert_eq!(parser[name].value().map(String::as_str), Some("World"));
/// assert_eq!(parser[verbose].count(), 2);
/// ```
#[derive(Default)]
pub struct OptionParser {
    pub(crate) options: Vec<Box<dyn Claim>>,
    settings: Vec<Setting>,
    pub(crate) bin_name: Option<String>,
    pub(crate) help_name: Option<String>,
    pub(crate) invocation: Option<String>,
    unparsed: Vec<String>,
    stopped: Vec<String>,
}

impl OptionParser {
    /// A parser with no options and default settings
    pub fn new() -> Self {
        Default::default()
    }

    /// Register an option; options claim tokens in registration order
    ///
    /// # Panics
    ///
    /// When a flag form is already used by another option
    #[track_caller]
    pub fn option<C: Claim + 'static>(&mut self, mut option: C) -> Slot<C> {
        for existing in &self.options {
            if let Some(short) = option.flag().short() {
                if existing.flag().short() == Some(short) {
                    panic!("non-unique short flag '{short}'");
                }
            }
            if let Some(long) = option.flag().long() {
                if existing.flag().long() == Some(long) {
                    panic!("non-unique long flag '{long}'");
                }
            }
        }
        option.reset();
        self.options.push(Box::new(option));
        Slot {
            index: self.options.len() - 1,
            marker: PhantomData,
        }
    }

    /// Enable a [`Setting`]
    pub fn setting(mut self, setting: Setting) -> Self {
        if !self.settings.contains(&setting) {
            self.settings.push(setting);
        }
        self
    }

    /// Program name for usage and error messages, defaults to `argv[0]`'s file name
    pub fn bin_name(mut self, name: impl Into<String>) -> Self {
        self.bin_name = Some(name.into());
        self
    }

    /// Name of the sub-command this parser handles
    pub fn help_name(mut self, name: impl Into<String>) -> Self {
        self.help_name = Some(name.into());
        self
    }

    /// Replace the generated invocation line(s) of the usage text
    pub fn invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = Some(invocation.into());
        self
    }

    /// Whether `setting` is enabled
    pub fn has(&self, setting: Setting) -> bool {
        self.settings.contains(&setting)
    }

    /// Registered options, in claim order
    pub fn options(&self) -> impl Iterator<Item = &dyn Claim> {
        self.options.iter().map(|option| &**option)
    }

    /// Tokens no option claimed in the last parse, stopped tokens last
    pub fn unparsed_arguments(&self) -> &[String] {
        &self.unparsed
    }

    /// Tokens that followed the stop operand in the last parse
    pub fn stopped_arguments(&self) -> &[String] {
        &self.stopped
    }

    /// Parse the process arguments, skipping the program name
    ///
    /// Non-UTF-8 arguments are converted lossily.  To skip more than the
    /// program name, e.g. a sub-command, call [`OptionParser::parse_from`]
    /// with `std::env::args()` and the number of tokens to skip.
    pub fn parse(&mut self) -> Result<()> {
        let raw = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        self.parse_from(raw, 1)
    }

    /// Parse `tokens[from_index..]`, applying the failure policy
    ///
    /// Unless [`Setting::ThrowsErrors`] is enabled, a failure is printed with
    /// the usage text to stderr and the process exits with status 1 through
    /// [`std::process::exit`].  Callers that handle termination themselves
    /// use [`OptionParser::try_parse_from`] with [`OptionParser::render_failure`].
    pub fn parse_from<I, S>(&mut self, tokens: I, from_index: usize) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.try_parse_from(tokens, from_index) {
            Ok(()) => Ok(()),
            Err(err) if self.has(Setting::ThrowsErrors) => Err(err),
            Err(err) => self.exit(&err),
        }
    }

    /// Parse `tokens[from_index..]`, always returning failures
    pub fn try_parse_from<I, S>(&mut self, tokens: I, from_index: usize) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allow_unparsed = self.has(Setting::AllowUnparsedOptions);
        let ignore_no_input = self.has(Setting::IgnoreNoInput);
        let allow_repeats = self.has(Setting::IgnoreSingleValue);

        self.unparsed.clear();
        self.stopped.clear();
        for option in &mut self.options {
            option.reset();
        }

        let mut unclaimed = gaps_lexer::expand(tokens.into_iter().skip(from_index));
        tracing::debug!(tokens = unclaimed.len(), "parsing arguments");
        if unclaimed.is_empty() && !ignore_no_input {
            return Err(ParserError::NoInput);
        }

        if let Some(stop) = unclaimed.iter().position(|token| token == STOP_OPERAND) {
            self.stopped = unclaimed.split_off(stop + 1);
            unclaimed.truncate(stop);
        }

        for option in &mut self.options {
            let option = &mut **option;
            let occurrences = unclaimed
                .iter()
                .enumerate()
                .filter(|(_, token)| option.flag().matches(token))
                .map(|(index, _)| index)
                .collect::<Vec<_>>();
            if occurrences.is_empty() {
                continue;
            }
            if 1 < occurrences.len() && option.is_single_value() && !allow_repeats {
                return Err(ParserError::InvalidUse {
                    option: option.description(),
                });
            }

            let mut claimed = occurrences.clone();
            for &occurrence in &occurrences {
                tracing::trace!(flag = %unclaimed[occurrence], index = occurrence, "occurrence");
                claim_window(option, &unclaimed, occurrence, &occurrences, &mut claimed)?;
            }

            claimed.sort_unstable();
            claimed.dedup();
            for index in claimed.into_iter().rev() {
                unclaimed.remove(index);
            }
        }

        self.unparsed = unclaimed;
        self.unparsed.extend(self.stopped.iter().cloned());
        tracing::debug!(
            unparsed = self.unparsed.len(),
            stopped = self.stopped.len(),
            "parsed arguments"
        );

        if let Some(missing) = self
            .options
            .iter()
            .find(|option| option.is_required() && !option.was_set())
        {
            return Err(ParserError::MissingRequiredOption {
                option: missing.description(),
            });
        }

        if !allow_unparsed {
            if let Some(first) = self.unparsed.first() {
                return Err(ParserError::UnparsedArgument {
                    argument: first.clone(),
                });
            }
        }

        Ok(())
    }

    fn exit(&self, err: &ParserError) -> ! {
        use std::io::Write as _;

        let mut stderr = anstream::stderr().lock();
        if let Some(message) = err.message() {
            let _ = writeln!(
                stderr,
                "{}: {}{message}{}",
                self.display_name(),
                ERROR.render(),
                ERROR.render_reset()
            );
        }
        let _ = writeln!(stderr, "{}", self.usage());
        let _ = stderr.flush();
        std::process::exit(1)
    }
}

/// Offer the tokens after `occurrence`, up to the next option or the next
/// occurrence of this one, to `option`
///
/// Records the index of every token the option accepted in `claimed`.
fn claim_window(
    option: &mut dyn Claim,
    unclaimed: &[String],
    occurrence: usize,
    occurrences: &[usize],
    claimed: &mut Vec<usize>,
) -> Result<()> {
    let start = occurrence + 1;
    let window = unclaimed[start..]
        .iter()
        .enumerate()
        .take_while(|(offset, token)| {
            !gaps_lexer::is_option(token) && !occurrences.contains(&(start + offset))
        })
        .map(|(_, token)| token)
        .collect::<Vec<_>>();

    if window.is_empty() {
        return option.claim_flag();
    }

    for (offset, token) in window.into_iter().enumerate() {
        match option.claim_value(token) {
            Ok(()) => {
                tracing::trace!(value = %token, "claimed");
                claimed.push(start + offset);
            }
            // Left for a later option or as a leftover
            Err(err) if err.is_unparsed_argument() => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

impl std::fmt::Debug for OptionParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionParser")
            .field(
                "options",
                &self
                    .options
                    .iter()
                    .map(|option| option.description())
                    .collect::<Vec<_>>(),
            )
            .field("settings", &self.settings)
            .field("bin_name", &self.bin_name)
            .field("help_name", &self.help_name)
            .field("unparsed", &self.unparsed)
            .field("stopped", &self.stopped)
            .finish()
    }
}

impl<C: Claim + 'static> std::ops::Index<Slot<C>> for OptionParser {
    type Output = C;

    fn index(&self, slot: Slot<C>) -> &C {
        self.options
            .get(slot.index)
            .and_then(|option| (**option).as_any().downcast_ref())
            .unwrap_or_else(|| panic!("slot {} belongs to another parser", slot.index))
    }
}

impl<C: Claim + 'static> std::ops::IndexMut<Slot<C>> for OptionParser {
    fn index_mut(&mut self, slot: Slot<C>) -> &mut C {
        self.options
            .get_mut(slot.index)
            .and_then(|option| (**option).as_any_mut().downcast_mut())
            .unwrap_or_else(|| panic!("slot {} belongs to another parser", slot.index))
    }
}
