/// Crate Error type
#[derive(Debug)]
pub enum Error {
    /// Rejected roll specification, with a human readable detail
    Parse(String),
    /// Failed write to the output sink
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Parse(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Parse(value)
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
