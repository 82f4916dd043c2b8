mod profile;
mod sections;

pub use profile::*;
pub use sections::*;

use serde::{Deserialize, Serialize};

/// The whole application state.
///
/// One instance is owned by the state store for the lifetime of a session.
/// Every section defaults independently so partial snapshots from storage
/// deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub navigation: NavigationState,
    pub user_profile: UserProfile,
    pub commerce: CommerceState,
    pub scroll: ScrollState,
    pub processing: ProcessingState,
    pub ui: UiState,
    pub interactions: InteractionState,
    pub collections: CollectionState,
}

impl AppState {
    /// Sum of quantities across cart lines (the cart badge value).
    /// Saturates instead of overflowing on oversized stored quantities.
    pub fn cart_item_count(&self) -> u32 {
        self.commerce
            .shopping_cart
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    pub fn is_wishlisted(&self, outfit_id: crate::OutfitId) -> bool {
        self.commerce.wishlist.contains(&outfit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageId, Theme};

    #[test]
    fn test_defaults_match_initial_session() {
        let state = AppState::default();
        assert_eq!(state.navigation.current_page, PageId::Entry);
        assert_eq!(state.navigation.current_step, 1);
        assert_eq!(state.navigation.current_outfit_id, 1);
        assert_eq!(state.user_profile.preferences.theme, Theme::Light);
        assert!(state.user_profile.preferences.notifications);
        assert_eq!(state.user_profile.preferences.currency, "USD");
        assert_eq!(state.scroll.current_outfit_page, 1);
        assert_eq!(state.scroll.outfits_per_page, 8);
        assert!(!state.scroll.is_loading);
        assert!(state.scroll.has_more_outfits);
    }

    #[test]
    fn test_serializes_with_camel_case_sections() {
        let value = serde_json::to_value(AppState::default()).unwrap();
        assert_eq!(value["navigation"]["currentPage"], "entry-page");
        assert_eq!(value["userProfile"]["preferences"]["theme"], "light");
        assert_eq!(value["scroll"]["hasMoreOutfits"], true);
        assert!(value["collections"]["userCollections"].is_array());
        assert!(value["interactions"]["userRatings"].is_object());
    }

    #[test]
    fn test_partial_snapshot_fills_defaults() {
        let state: AppState =
            serde_json::from_str(r#"{"navigation": {"currentStep": 4}}"#).unwrap();
        assert_eq!(state.navigation.current_step, 4);
        assert_eq!(state.navigation.current_page, PageId::Entry);
        assert_eq!(state.scroll.outfits_per_page, 8);
    }

    #[test]
    fn test_cart_count_saturates() {
        let state: AppState = serde_json::from_str(
            r#"{"commerce": {"shoppingCart": [
                {"id": "a", "outfitId": 1, "productName": "Blouse", "productBrand": "COS",
                 "price": 10.0, "quantity": 3000000000, "addedAt": "2024-01-15T10:00:00Z"},
                {"id": "b", "outfitId": 2, "productName": "Jeans", "productBrand": "Levi's",
                 "price": 20.0, "quantity": 3000000000, "addedAt": "2024-01-15T10:00:00Z"}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(state.cart_item_count(), u32::MAX);
    }
}
