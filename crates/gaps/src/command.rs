use crate::usage::default_bin_name;
use crate::usage::indent_invocation;
use crate::ParserError;
use crate::Result;
use crate::ERROR;
use crate::Setting;

/// Error type returned by a [`Command`]'s action
pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

type Action = Box<dyn Fn() -> std::result::Result<(), CommandError>>;

/// A sub-command selected by name, e.g. the `build` in `tool build --release`
pub struct Command {
    value: String,
    help: String,
    action: Action,
}

impl Command {
    /// A command named `value`, running `action` when called
    pub fn new(
        value: impl Into<String>,
        help: impl Into<String>,
        action: impl Fn() -> std::result::Result<(), CommandError> + 'static,
    ) -> Self {
        Self {
            value: value.into(),
            help: help.into(),
            action: Box::new(action),
        }
    }

    /// The name selecting this command
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text listed next to the name in usage
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Run the command's action
    pub fn call(&self) -> std::result::Result<(), CommandError> {
        (self.action)()
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("value", &self.value)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// What [`CommandParser::try_parse_from`] found at the command position
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selected {
    /// A command matched; see [`CommandParser::parsed_command`]
    Command,
    /// The help argument was given
    Help,
    /// The version argument was given
    Version,
}

/// Selects one [`Command`] by the argument at a fixed position
///
/// Typically the remaining arguments are then handed to an
/// [`OptionParser`][crate::OptionParser] for that command.
#[derive(Debug, Default)]
pub struct CommandParser {
    commands: Vec<Command>,
    settings: Vec<Setting>,
    bin_name: Option<String>,
    invocation: Option<String>,
    help_argument: Option<String>,
    version: Option<(String, String)>,
    parsed: Option<usize>,
}

impl CommandParser {
    /// A parser with no commands
    pub fn new() -> Self {
        Default::default()
    }

    /// Register a command
    ///
    /// # Panics
    ///
    /// When another command already has the same name
    #[track_caller]
    pub fn command(mut self, command: Command) -> Self {
        if self.commands.iter().any(|c| c.value == command.value) {
            panic!("non-unique command value '{}'", command.value);
        }
        self.commands.push(command);
        self
    }

    /// Enable a [`Setting`]; only [`Setting::ThrowsErrors`] applies
    ///
    /// # Panics
    ///
    /// In debug builds, for any other setting
    #[track_caller]
    pub fn setting(mut self, setting: Setting) -> Self {
        debug_assert!(
            setting == Setting::ThrowsErrors,
            "{setting:?} has no effect on a command parser"
        );
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

    /// Replace the `<command> [options]` invocation line
    pub fn invocation(mut self, invocation: impl Into<String>) -> Self {
        self.invocation = Some(invocation.into());
        self
    }

    /// Argument that prints usage instead of selecting a command, e.g. `help`
    pub fn help_argument(mut self, argument: impl Into<String>) -> Self {
        self.help_argument = Some(argument.into());
        self
    }

    /// Argument that prints `version` instead of selecting a command
    pub fn version_argument(
        mut self,
        argument: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.version = Some((argument.into(), version.into()));
        self
    }

    /// The command selected by the last parse
    pub fn parsed_command(&self) -> Option<&Command> {
        self.parsed.map(|index| &self.commands[index])
    }

    /// Select a command from the process arguments, skipping the program name
    pub fn parse(&mut self) -> Result<()> {
        let raw = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        self.parse_from(raw, 1)
    }

    /// Select a command from `tokens[index]`, applying the failure policy
    ///
    /// Help and version are printed to stdout and exit with status 0.  Unless
    /// [`Setting::ThrowsErrors`] is enabled, a failure is printed with the
    /// usage text to stderr and the process exits with status 1.  Use
    /// [`CommandParser::try_parse_from`] to handle termination yourself.
    pub fn parse_from<I, S>(&mut self, tokens: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        use std::io::Write as _;

        match self.try_parse_from(tokens, index) {
            Ok(Selected::Command) => Ok(()),
            Ok(Selected::Help) => {
                let mut stdout = anstream::stdout().lock();
                let _ = writeln!(stdout, "{}", self.usage());
                std::process::exit(0)
            }
            Ok(Selected::Version) => {
                let version = self.version.as_ref().map_or("", |(_, v)| v.as_str());
                let mut stdout = anstream::stdout().lock();
                let _ = writeln!(stdout, "{version}");
                std::process::exit(0)
            }
            Err(err) if self.settings.contains(&Setting::ThrowsErrors) => Err(err),
            Err(err) => {
                let mut stderr = anstream::stderr().lock();
                if let Some(message) = err.message() {
                    let _ = writeln!(
                        stderr,
                        "{}: {}{message}{}",
                        self.program_name(),
                        ERROR.render(),
                        ERROR.render_reset()
                    );
                }
                let _ = writeln!(stderr, "{}", self.usage());
                std::process::exit(1)
            }
        }
    }

    /// Select a command from `tokens[index]`, always returning failures
    pub fn try_parse_from<I, S>(&mut self, tokens: I, index: usize) -> Result<Selected>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed = None;
        let value: String = tokens
            .into_iter()
            .nth(index)
            .map(Into::into)
            .ok_or(ParserError::NoInput)?;

        if self.help_argument.as_deref() == Some(value.as_str()) {
            return Ok(Selected::Help);
        }
        if self.version.as_ref().map(|(argument, _)| argument.as_str()) == Some(value.as_str()) {
            return Ok(Selected::Version);
        }

        let index = self
            .commands
            .iter()
            .position(|command| command.value == value)
            .ok_or(ParserError::UnrecognizedCommand { command: value })?;
        tracing::debug!(command = %self.commands[index].value, "selected command");
        self.parsed = Some(index);
        Ok(Selected::Command)
    }

    /// The usage text, listing every command
    pub fn usage(&self) -> String {
        let title = format!("usage: {} ", self.program_name());
        let invocation = self.invocation.as_deref().unwrap_or("<command> [options]");
        let mut lines = indent_invocation(&title, invocation);

        lines.push(String::new());
        lines.push("available commands:".to_owned());
        let width = self
            .commands
            .iter()
            .map(|command| command.value.chars().count())
            .max()
            .unwrap_or(0)
            + 3;
        for command in &self.commands {
            lines.push(format!("  {:<width$}{}", command.value, command.help));
        }
        lines.push(String::new());

        lines.join("\n")
    }

    /// What the default failure policy writes to stderr, without styling
    pub fn render_failure(&self, err: &ParserError) -> String {
        let mut rendered = String::new();
        if let Some(message) = err.message() {
            rendered.push_str(&format!("{}: {message}\n", self.program_name()));
        }
        rendered.push_str(&self.usage());
        rendered.push('\n');
        rendered
    }

    fn program_name(&self) -> String {
        self.bin_name.clone().unwrap_or_else(default_bin_name)
    }
}
