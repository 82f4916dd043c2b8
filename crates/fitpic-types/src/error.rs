use std::fmt;

/// Result type for fitpic-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// An identifier string did not name a known value
    UnknownIdentifier { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownIdentifier { kind, value } => {
                write!(f, "Unknown {}: '{}'", kind, value)
            }
        }
    }
}

impl std::error::Error for Error {}
