use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Dimensions of the multi-category filter modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Location,
    Style,
    Event,
    Season,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Location,
        FilterCategory::Style,
        FilterCategory::Event,
        FilterCategory::Season,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::Location => "location",
            FilterCategory::Style => "style",
            FilterCategory::Event => "event",
            FilterCategory::Season => "season",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FilterCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownIdentifier {
                kind: "filter category",
                value: s.to_string(),
            })
    }
}
