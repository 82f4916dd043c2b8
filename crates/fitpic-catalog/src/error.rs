use std::fmt;

use fitpic_types::OutfitId;

/// Result type for fitpic-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or mutating the catalog
#[derive(Debug)]
pub enum Error {
    /// Embedded or supplied catalog JSON did not parse
    Data(serde_json::Error),

    /// No outfit with this id exists in the catalog
    UnknownOutfit(OutfitId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Data(err) => write!(f, "Catalog data error: {}", err),
            Error::UnknownOutfit(id) => write!(f, "Outfit {} not found in catalog", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Data(err) => Some(err),
            Error::UnknownOutfit(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Data(err)
    }
}
