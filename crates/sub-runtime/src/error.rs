use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The configured root has no `libexec` directory
    LibexecNotFound(PathBuf),

    /// A command token did not name an entry in the tree
    NoSuchSubCommand(String),

    /// Residual arguments did not satisfy the script's usage line
    Bind(sub_engine::Error),

    /// The script could not be started
    Launch(std::io::Error),

    /// Invalid dispatcher configuration
    Config(String),

    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LibexecNotFound(_) => write!(f, "libexec directory not found in root"),
            Error::NoSuchSubCommand(name) => write!(f, "no such sub command '{}'", name),
            Error::Bind(err) => write!(f, "{}", err),
            Error::Launch(err) => write!(f, "{}", err),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Bind(err) => Some(err),
            Error::Launch(err) | Error::Io(err) => Some(err),
            Error::LibexecNotFound(_) | Error::NoSuchSubCommand(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<sub_engine::Error> for Error {
    fn from(err: sub_engine::Error) -> Self {
        Error::Bind(err)
    }
}
