use std::cell::Cell;
use std::io::Read as _;
use std::io::Write as _;
use std::path::Path;

use crate::claim::declaration_builders;
use crate::claim::Declaration;
use crate::Claim;
use crate::FileOptionError;
use crate::Flag;
use crate::ParserError;
use crate::Result;
use crate::FILE_OPERAND;

/// A path the program will read, `-` meaning stdin
///
/// The path is only checked when first accessed.
#[derive(Clone, Debug)]
pub struct FileForReadingOption {
    decl: Declaration,
    path: Option<String>,
    validated: Cell<bool>,
}

impl FileForReadingOption {
    /// Declare from one or two bare names, e.g. `["i", "input"]`
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
            path: None,
            validated: Cell::new(false),
        }
    }

    declaration_builders!();

    /// The claimed path, unvalidated
    pub fn value(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Check the path exists, is not a directory and can be opened
    pub fn validate(&self) -> Result<(), FileOptionError> {
        let path = self.path()?;
        if self.validated.get() || path == FILE_OPERAND {
            return Ok(());
        }
        let metadata = std::fs::metadata(path).map_err(|_err| FileOptionError::FileNotFound {
            option: self.description(),
            path: path.to_owned(),
        })?;
        if metadata.is_dir() {
            return Err(FileOptionError::IsDirectory {
                option: self.description(),
                path: path.to_owned(),
            });
        }
        std::fs::File::open(path).map_err(|_err| FileOptionError::IsNotReadable {
            option: self.description(),
            path: path.to_owned(),
        })?;
        self.validated.set(true);
        Ok(())
    }

    /// Open the path (or stdin) for reading
    pub fn reader(&self) -> Result<Box<dyn std::io::Read>, FileOptionError> {
        self.validate()?;
        let path = self.path()?;
        if path == FILE_OPERAND {
            return Ok(Box::new(std::io::stdin()));
        }
        let file =
            std::fs::File::open(path).map_err(|_err| FileOptionError::CouldNotOpenForReading {
                option: self.description(),
                path: path.to_owned(),
            })?;
        Ok(Box::new(file))
    }

    /// Read the whole file (or stdin)
    pub fn read_to_end(&self) -> Result<Vec<u8>, FileOptionError> {
        let mut reader = self.reader()?;
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|_err| FileOptionError::CouldNotOpenForReading {
                option: self.description(),
                path: self.path.clone().unwrap_or_default(),
            })?;
        Ok(data)
    }

    fn path(&self) -> Result<&str, FileOptionError> {
        self.path
            .as_deref()
            .ok_or_else(|| FileOptionError::PathNotSet {
                option: self.description(),
            })
    }
}

impl Claim for FileForReadingOption {
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
        self.path.is_some()
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
        claim_path(&mut self.path, &self.validated, argument)
    }

    fn reset(&mut self) {
        self.path = None;
        self.validated.set(false);
    }
}

/// A path the program will write, `-` meaning stdout
///
/// The path is only checked when first accessed; a missing file is created
/// when opened.
#[derive(Clone, Debug)]
pub struct FileForWritingOption {
    decl: Declaration,
    path: Option<String>,
    validated: Cell<bool>,
}

impl FileForWritingOption {
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
            path: None,
            validated: Cell::new(false),
        }
    }

    declaration_builders!();

    /// The claimed path, unvalidated
    pub fn value(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Check the path (or, for a new file, its directory) is writable
    pub fn validate(&self) -> Result<(), FileOptionError> {
        let path = self.path()?;
        if self.validated.get() || path == FILE_OPERAND {
            return Ok(());
        }
        let not_writable = || FileOptionError::IsNotWritable {
            option: self.description(),
            path: path.to_owned(),
        };
        if path == "/" {
            return Err(not_writable());
        }

        match std::fs::metadata(path) {
            Ok(metadata) => {
                if metadata.is_dir() {
                    return Err(FileOptionError::IsDirectory {
                        option: self.description(),
                        path: path.to_owned(),
                    });
                }
                let opened = std::fs::OpenOptions::new().write(true).open(path);
                if opened.is_err() {
                    return Err(not_writable());
                }
            }
            Err(_) => {
                let parent = match Path::new(path).parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                let metadata = std::fs::metadata(parent).map_err(|_err| not_writable())?;
                if !metadata.is_dir() || !is_writable_dir(parent, &metadata) {
                    return Err(not_writable());
                }
            }
        }
        self.validated.set(true);
        Ok(())
    }

    /// Open the path (or stdout) for writing, creating the file if needed
    pub fn writer(&self) -> Result<Box<dyn std::io::Write>, FileOptionError> {
        self.validate()?;
        let path = self.path()?;
        if path == FILE_OPERAND {
            return Ok(Box::new(std::io::stdout()));
        }
        if !Path::new(path).exists() {
            std::fs::File::create(path).map_err(|_err| FileOptionError::CouldNotCreate {
                option: self.description(),
                path: path.to_owned(),
            })?;
        }
        let file = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|_err| FileOptionError::CouldNotOpenForWriting {
                option: self.description(),
                path: path.to_owned(),
            })?;
        Ok(Box::new(file))
    }

    /// Replace the file's contents (or write to stdout)
    pub fn write_all(&self, data: &[u8]) -> Result<(), FileOptionError> {
        let mut writer = self.writer()?;
        writer
            .write_all(data)
            .and_then(|()| writer.flush())
            .map_err(|_err| FileOptionError::CouldNotOpenForWriting {
                option: self.description(),
                path: self.path.clone().unwrap_or_default(),
            })
    }

    fn path(&self) -> Result<&str, FileOptionError> {
        self.path
            .as_deref()
            .ok_or_else(|| FileOptionError::PathNotSet {
                option: self.description(),
            })
    }
}

impl Claim for FileForWritingOption {
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
        self.path.is_some()
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
        claim_path(&mut self.path, &self.validated, argument)
    }

    fn reset(&mut self) {
        self.path = None;
        self.validated.set(false);
    }
}

/// Whether the current user may create entries in `dir`
#[cfg(unix)]
fn is_writable_dir(dir: &Path, _metadata: &std::fs::Metadata) -> bool {
    nix::unistd::access(dir, nix::unistd::AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable_dir(_dir: &Path, metadata: &std::fs::Metadata) -> bool {
    !metadata.permissions().readonly()
}

fn claim_path(path: &mut Option<String>, validated: &Cell<bool>, argument: &str) -> Result<()> {
    if path.is_some() {
        return Err(ParserError::UnparsedArgument {
            argument: argument.to_owned(),
        });
    }
    *path = Some(argument.to_owned());
    validated.set(false);
    Ok(())
}
