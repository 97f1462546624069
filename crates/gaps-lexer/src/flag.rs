use crate::has_long_prefix;
use crate::has_short_prefix;
use crate::LONG_PREFIX;
use crate::SHORT_PREFIX;

/// The command-line names of one option
///
/// Declared from bare names: a one-character name becomes the short form
/// (`"v"` → `-v`), anything longer the long form (`"verbose"` → `--verbose`).
///
/// ```
/// let flag = gaps_lexer::Flag::new(["verbose", "v"]);
/// assert_eq!(flag.short(), Some("-v"));
/// assert_eq!(flag.long(), Some("--verbose"));
/// assert_eq!(flag.values(), ["-v", "--verbose"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Flag {
    short: Option<String>,
    long: Option<String>,
}

impl Flag {
    /// Declare a flag from one or two bare names
    ///
    /// # Panics
    ///
    /// On any [`FlagError`]; a malformed declaration is a programming error.
    #[track_caller]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match Self::try_new(names) {
            Ok(flag) => flag,
            Err(err) => panic!("{err}"),
        }
    }

    /// Declare a flag from one or two bare names, reporting malformed declarations
    pub fn try_new<I, S>(names: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = names
            .into_iter()
            .map(|name| name.as_ref().to_owned())
            .collect::<Vec<_>>();

        if names
            .iter()
            .any(|name| has_short_prefix(name) || has_long_prefix(name))
        {
            return Err(FlagError::new(FlagErrorKind::Prefixed, names));
        }
        if names.iter().any(|name| name.is_empty()) {
            return Err(FlagError::new(FlagErrorKind::Empty, names));
        }

        names.sort_by_key(|name| name.chars().count());
        match names.as_slice() {
            [name] if name.chars().count() == 1 => Ok(Self {
                short: Some(format!("{SHORT_PREFIX}{name}")),
                long: None,
            }),
            [name] => Ok(Self {
                short: None,
                long: Some(format!("{LONG_PREFIX}{name}")),
            }),
            [short, long] if short.chars().count() == 1 && long.chars().count() > 1 => Ok(Self {
                short: Some(format!("{SHORT_PREFIX}{short}")),
                long: Some(format!("{LONG_PREFIX}{long}")),
            }),
            [_, _] => Err(FlagError::new(FlagErrorKind::NotShortAndLong, names)),
            _ => Err(FlagError::new(FlagErrorKind::Count, names)),
        }
    }

    /// The short form, including its prefix
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long form, including its prefix
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Every present form, short first
    pub fn values(&self) -> Vec<&str> {
        self.short().into_iter().chain(self.long()).collect()
    }

    /// Whether `token` is exactly one of this flag's forms
    pub fn matches(&self, token: &str) -> bool {
        self.short() == Some(token) || self.long() == Some(token)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.values().join(", ").fmt(f)
    }
}

/// A malformed [`Flag`] declaration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagError {
    kind: FlagErrorKind,
    names: Vec<String>,
}

impl FlagError {
    fn new(kind: FlagErrorKind, names: Vec<String>) -> Self {
        Self { kind, names }
    }

    /// The names as they were declared
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FlagErrorKind {
    Prefixed,
    Empty,
    NotShortAndLong,
    Count,
}

impl std::fmt::Display for FlagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "(flags: {:?})", self.names)?;
        match self.kind {
            FlagErrorKind::Prefixed => write!(
                f,
                "flags cannot start with {SHORT_PREFIX} or {LONG_PREFIX}, prefix should be omitted when specifying flags"
            ),
            FlagErrorKind::Empty => f.write_str("an option's flag cannot have zero length"),
            FlagErrorKind::NotShortAndLong => {
                f.write_str("an option with 2 flags requires one short and one long flag")
            }
            FlagErrorKind::Count => {
                f.write_str("an option requires either short, long, or short + long flags")
            }
        }
    }
}

impl std::error::Error for FlagError {}
