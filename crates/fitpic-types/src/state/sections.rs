use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{CartItem, Collection, Outfit, OutfitId, PageId, ProfileDraft, ScheduledOutfit};

pub const DEFAULT_OUTFITS_PER_PAGE: u32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationState {
    pub current_page: PageId,
    /// Onboarding step, always within `1..=ONBOARDING_STEPS`
    pub current_step: u8,
    pub current_outfit_id: OutfitId,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: PageId::Entry,
            current_step: 1,
            current_outfit_id: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CommerceState {
    pub shopping_cart: Vec<CartItem>,
    pub wishlist: Vec<OutfitId>,
}

/// Infinite-scroll pagination state of the outfit feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollState {
    /// Next page to load (1-based)
    pub current_outfit_page: u32,
    pub outfits_per_page: u32,
    pub is_loading: bool,
    pub has_more_outfits: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            current_outfit_page: 1,
            outfits_per_page: DEFAULT_OUTFITS_PER_PAGE,
            is_loading: false,
            has_more_outfits: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingState {
    pub processing_index: usize,
    pub insight_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    pub is_navigation_expanded: bool,
    pub selected_schedule_day: Option<String>,
    pub selected_occasion: Option<String>,
    pub selected_modifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionState {
    /// Star rating (1-5) this user gave per outfit
    pub user_ratings: BTreeMap<OutfitId, u8>,
    pub profile_draft: Option<ProfileDraft>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionState {
    pub user_collections: Vec<Collection>,
    pub saved_outfits: Vec<Outfit>,
    pub scheduled_outfits: Vec<ScheduledOutfit>,
    pub user_remixes: Vec<Outfit>,
}
