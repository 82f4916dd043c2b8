use std::fmt;

use fitpic_types::OutfitId;

/// Result type for fitpic-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while applying a state transition
#[derive(Debug)]
pub enum Error {
    /// Catalog lookup failed
    Catalog(fitpic_catalog::Error),

    /// The user asked for something the current state does not allow.
    /// The message is shown to the user as is.
    Rejected(String),

    /// Rating outside 1..=5
    InvalidRating(u8),

    /// No cart line with this id
    UnknownCartItem(String),

    /// No collection with this id
    UnknownCollection(String),

    /// Outfit id does not exist in the catalog
    UnknownOutfit(OutfitId),
}

impl Error {
    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Error::Rejected(message.into())
    }

    /// Message suitable for a toast, if this error is meant for the user.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Error::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(err) => write!(f, "Catalog error: {}", err),
            Error::Rejected(message) => f.write_str(message),
            Error::InvalidRating(rating) => {
                write!(f, "Rating must be between 1 and 5, got {}", rating)
            }
            Error::UnknownCartItem(id) => write!(f, "Cart item '{}' not found", id),
            Error::UnknownCollection(id) => write!(f, "Collection '{}' not found", id),
            Error::UnknownOutfit(id) => write!(f, "Outfit {} not found", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<fitpic_catalog::Error> for Error {
    fn from(err: fitpic_catalog::Error) -> Self {
        match err {
            fitpic_catalog::Error::UnknownOutfit(id) => Error::UnknownOutfit(id),
            other => Error::Catalog(other),
        }
    }
}
