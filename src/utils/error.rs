use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum MdtocError {
    /// IO error wrapper
    Io(io::Error),
    /// Target or source file missing
    NotFound(String),
    /// Required argument missing or malformed
    InvalidInput(String),
    /// Invalid glob pattern
    Pattern(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
            MdtocError::NotFound(path) => write!(f, "file does not exist: {}", path),
            MdtocError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            MdtocError::Pattern(msg) => write!(f, "invalid pattern: {}", msg),
            MdtocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for MdtocError {}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}

impl From<glob::PatternError> for MdtocError {
    fn from(err: glob::PatternError) -> Self {
        MdtocError::Pattern(err.to_string())
    }
}

impl From<String> for MdtocError {
    fn from(msg: String) -> Self {
        MdtocError::Generic(msg)
    }
}

impl From<&str> for MdtocError {
    fn from(msg: &str) -> Self {
        MdtocError::Generic(msg.to_string())
    }
}
