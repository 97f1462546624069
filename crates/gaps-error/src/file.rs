/// Why a file option's path could not be used
///
/// Raised lazily, when the path is first accessed, never during a parse cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
#[allow(missing_docs)]
pub enum FileOptionError {
    PathNotSet { option: String },
    FileNotFound { option: String, path: String },
    IsDirectory { option: String, path: String },
    IsNotReadable { option: String, path: String },
    CouldNotOpenForReading { option: String, path: String },
    IsNotWritable { option: String, path: String },
    CouldNotCreate { option: String, path: String },
    CouldNotOpenForWriting { option: String, path: String },
}

impl FileOptionError {
    /// Description of the offending option
    pub fn option(&self) -> &str {
        match self {
            Self::PathNotSet { option }
            | Self::FileNotFound { option, .. }
            | Self::IsDirectory { option, .. }
            | Self::IsNotReadable { option, .. }
            | Self::CouldNotOpenForReading { option, .. }
            | Self::IsNotWritable { option, .. }
            | Self::CouldNotCreate { option, .. }
            | Self::CouldNotOpenForWriting { option, .. } => option,
        }
    }
}

impl std::fmt::Display for FileOptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PathNotSet { option } => write!(f, "'{option}' path not set"),
            Self::FileNotFound { option, path } => {
                write!(f, "'{option}' file not found at path '{path}'")
            }
            Self::IsDirectory { option, path } => {
                write!(f, "'{option}' path '{path}' is a directory")
            }
            Self::IsNotReadable { option, path } => {
                write!(f, "'{option}' path '{path}' is not readable")
            }
            Self::CouldNotOpenForReading { option, path } => {
                write!(f, "'{option}' could not open file for reading at path '{path}'")
            }
            Self::IsNotWritable { option, path } => {
                write!(f, "'{option}' path '{path}' is not writable")
            }
            Self::CouldNotCreate { option, path } => {
                write!(f, "'{option}' could not create file for writing at path '{path}'")
            }
            Self::CouldNotOpenForWriting { option, path } => {
                write!(f, "'{option}' could not open file for writing at path '{path}'")
            }
        }
    }
}

impl std::error::Error for FileOptionError {}
