use std::fmt;

/// Result type for fitpic-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the App, its configuration and the dispatcher
#[derive(Debug)]
pub enum Error {
    /// Storage layer error
    Store(fitpic_store::Error),

    /// Catalog data error
    Catalog(fitpic_catalog::Error),

    /// State transition error
    Engine(fitpic_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON serialization failed
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Attribute set could not be turned into an action
    Dispatch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Storage error: {}", err),
            Error::Catalog(err) => write!(f, "Catalog error: {}", err),
            Error::Engine(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Dispatch(msg) => write!(f, "Dispatch error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Catalog(err) => Some(err),
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_) | Error::Dispatch(_) => None,
        }
    }
}

impl From<fitpic_store::Error> for Error {
    fn from(err: fitpic_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<fitpic_catalog::Error> for Error {
    fn from(err: fitpic_catalog::Error) -> Self {
        Error::Catalog(err)
    }
}

impl From<fitpic_engine::Error> for Error {
    fn from(err: fitpic_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
