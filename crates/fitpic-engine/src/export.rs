use chrono::{DateTime, Utc};
use serde::Serialize;

use fitpic_types::{AppState, CartItem, Collection, OutfitId, Preferences, UserProfile};

/// Default file name for exported user data.
pub const EXPORT_FILE_NAME: &str = "fitpic-data.json";

pub const EXPORTED_MESSAGE: &str = "Data exported successfully";

/// User data export: everything the user entered or saved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataExport<'a> {
    pub profile: &'a UserProfile,
    pub wishlist: &'a [OutfitId],
    pub cart: &'a [CartItem],
    pub collections: &'a [Collection],
    pub preferences: &'a Preferences,
    pub exported_at: DateTime<Utc>,
}

impl<'a> UserDataExport<'a> {
    pub fn from_state(state: &'a AppState, now: DateTime<Utc>) -> Self {
        Self {
            profile: &state.user_profile,
            wishlist: &state.commerce.wishlist,
            cart: &state.commerce.shopping_cart,
            collections: &state.collections.user_collections,
            preferences: &state.user_profile.preferences,
            exported_at: now,
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_export_contains_user_sections() {
        let mut state = AppState::default();
        state.user_profile.name = "Ada".to_string();
        state.commerce.wishlist = vec![3, 1];
        crate::collections::seed_defaults(&mut state);

        let json = UserDataExport::from_state(&state, Utc::now()).to_pretty_json().unwrap();
        assert!(json.contains("\n  \"profile\""));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["name"], "Ada");
        assert_eq!(value["wishlist"], serde_json::json!([3, 1]));
        assert_eq!(value["cart"], serde_json::json!([]));
        assert_eq!(value["collections"].as_array().unwrap().len(), 3);
        assert_eq!(value["preferences"]["currency"], "USD");
        assert!(value["exportedAt"].is_string());
    }
}
