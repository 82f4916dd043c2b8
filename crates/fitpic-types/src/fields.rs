//! Typed accessors onto [`AppState`].
//!
//! Each constant names one location in the state tree together with its
//! dot-path (the JSON path under which the location is persisted). Reads and
//! writes through a `Field` are checked at compile time; the dot-path is kept
//! for logging and for the dynamic path API used by the dispatcher and CLI.

use std::collections::BTreeMap;
use std::fmt;

use crate::{
    AppState, CartItem, Collection, Outfit, OutfitId, PageId, Preferences, ProfileDraft,
    ScheduledOutfit, ScrollState, Theme, UserProfile,
};

pub struct Field<T> {
    path: &'static str,
    get: fn(&AppState) -> &T,
    get_mut: fn(&mut AppState) -> &mut T,
}

impl<T> Field<T> {
    pub const fn new(
        path: &'static str,
        get: fn(&AppState) -> &T,
        get_mut: fn(&mut AppState) -> &mut T,
    ) -> Self {
        Self { path, get, get_mut }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn get<'a>(&self, state: &'a AppState) -> &'a T {
        (self.get)(state)
    }

    pub fn get_mut<'a>(&self, state: &'a mut AppState) -> &'a mut T {
        (self.get_mut)(state)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.path).finish()
    }
}

macro_rules! fields {
    ($($name:ident: $ty:ty = $path:literal => $($seg:ident).+;)+) => {
        $(
            pub const $name: Field<$ty> =
                Field::new($path, |s| &s.$($seg).+, |s| &mut s.$($seg).+);
        )+

        /// Dot-paths of every declared field.
        pub const ALL_PATHS: &[&str] = &[$($path),+];
    };
}

fields! {
    CURRENT_PAGE: PageId = "navigation.currentPage" => navigation.current_page;
    CURRENT_STEP: u8 = "navigation.currentStep" => navigation.current_step;
    CURRENT_OUTFIT_ID: OutfitId = "navigation.currentOutfitId" => navigation.current_outfit_id;

    USER_PROFILE: UserProfile = "userProfile" => user_profile;
    PREFERENCES: Preferences = "userProfile.preferences" => user_profile.preferences;
    THEME: Theme = "userProfile.preferences.theme" => user_profile.preferences.theme;

    SHOPPING_CART: Vec<CartItem> = "commerce.shoppingCart" => commerce.shopping_cart;
    WISHLIST: Vec<OutfitId> = "commerce.wishlist" => commerce.wishlist;

    SCROLL: ScrollState = "scroll" => scroll;
    CURRENT_OUTFIT_PAGE: u32 = "scroll.currentOutfitPage" => scroll.current_outfit_page;
    OUTFITS_PER_PAGE: u32 = "scroll.outfitsPerPage" => scroll.outfits_per_page;
    IS_LOADING: bool = "scroll.isLoading" => scroll.is_loading;
    HAS_MORE_OUTFITS: bool = "scroll.hasMoreOutfits" => scroll.has_more_outfits;

    PROCESSING_INDEX: usize = "processing.processingIndex" => processing.processing_index;
    INSIGHT_INDEX: usize = "processing.insightIndex" => processing.insight_index;

    NAVIGATION_EXPANDED: bool = "ui.isNavigationExpanded" => ui.is_navigation_expanded;
    SELECTED_SCHEDULE_DAY: Option<String> = "ui.selectedScheduleDay" => ui.selected_schedule_day;
    SELECTED_OCCASION: Option<String> = "ui.selectedOccasion" => ui.selected_occasion;
    SELECTED_MODIFICATIONS: Vec<String> = "ui.selectedModifications" => ui.selected_modifications;

    USER_RATINGS: BTreeMap<OutfitId, u8> = "interactions.userRatings" => interactions.user_ratings;
    PROFILE_DRAFT: Option<ProfileDraft> = "interactions.profileDraft" => interactions.profile_draft;

    USER_COLLECTIONS: Vec<Collection> = "collections.userCollections" => collections.user_collections;
    SAVED_OUTFITS: Vec<Outfit> = "collections.savedOutfits" => collections.saved_outfits;
    SCHEDULED_OUTFITS: Vec<ScheduledOutfit> = "collections.scheduledOutfits" => collections.scheduled_outfits;
    USER_REMIXES: Vec<Outfit> = "collections.userRemixes" => collections.user_remixes;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_exists_in_serialized_state() {
        let value = serde_json::to_value(AppState::default()).unwrap();
        for path in ALL_PATHS {
            let mut cursor = &value;
            for segment in path.split('.') {
                cursor = cursor
                    .get(segment)
                    .unwrap_or_else(|| panic!("segment '{}' of '{}' missing", segment, path));
            }
        }
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut state = AppState::default();
        *CURRENT_STEP.get_mut(&mut state) = 5;
        WISHLIST.get_mut(&mut state).push(3);
        assert_eq!(state.navigation.current_step, 5);
        assert_eq!(WISHLIST.get(&state), &vec![3]);
    }

    #[test]
    fn test_debug_shows_path() {
        assert_eq!(format!("{:?}", THEME), "Field(\"userProfile.preferences.theme\")");
    }
}
