use serde::{Deserialize, Serialize};

use crate::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub location: String,
    pub brands: Vec<String>,
    pub aesthetics: Vec<String>,
    pub events: Vec<String>,
    pub style_profile: Option<StyleProfile>,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: Theme,
    pub notifications: bool,
    pub currency: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            currency: "USD".to_string(),
        }
    }
}

/// Derived style summary produced at the end of onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub aesthetics: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
}
