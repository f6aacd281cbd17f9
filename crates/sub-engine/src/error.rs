use std::fmt;

/// Result type for sub-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading usage metadata or binding arguments
#[derive(Debug)]
pub enum Error {
    /// A required positional argument received no value
    MissingRequired(String),

    /// An exclusive flag was combined with another bound value
    ExclusiveConflict(String),

    /// IO operation failed while reading a script
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingRequired(name) => write!(f, "missing required argument: {}", name),
            Error::ExclusiveConflict(flag) => write!(
                f,
                "exclusive argument conflict: '{}' cannot be used with other arguments",
                flag
            ),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::MissingRequired(_) | Error::ExclusiveConflict(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
