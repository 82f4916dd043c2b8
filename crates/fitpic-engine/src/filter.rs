//! Feed filtering.
//!
//! Two mutually exclusive modes: a quick filter (one tag matched against the
//! card's combined category string) and the multi-category modal filter.
//! Applying either replaces the other; [`FeedFilter`] holds whichever is
//! active.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use fitpic_types::{FilterCategory, Outfit};

/// Selected values per category of the filter modal.
///
/// A card passes when, for every category with a selection, at least one of
/// its tags in that category is selected. Categories with no selection do
/// not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: FilterCategory, value: impl Into<String>) -> Self {
        self.select(category, value);
        self
    }

    pub fn select(&mut self, category: FilterCategory, value: impl Into<String>) {
        self.selected.entry(category).or_default().insert(value.into());
    }

    /// Flip one checkbox. Returns whether the value is now selected.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) -> bool {
        let values = self.selected.entry(category).or_default();
        let now_selected = if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        };
        if values.is_empty() {
            self.selected.remove(&category);
        }
        now_selected
    }

    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.selected
            .get(&category)
            .is_some_and(|values| values.contains(value))
    }

    pub fn values(&self, category: FilterCategory) -> impl Iterator<Item = &str> {
        self.selected
            .get(&category)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Total number of selected values across categories.
    pub fn count(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn matches(&self, outfit: &Outfit) -> bool {
        self.selected.iter().all(|(category, wanted)| {
            wanted.is_empty()
                || outfit
                    .tags_for(*category)
                    .iter()
                    .any(|tag| wanted.contains(tag))
        })
    }
}

/// Filter currently applied to the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum FeedFilter {
    #[default]
    None,
    Quick(String),
    Multi(ActiveFilters),
}

impl FeedFilter {
    /// Apply a quick-filter tag. Applying the active tag again clears it.
    pub fn apply_quick(&mut self, tag: &str) {
        *self = match &*self {
            FeedFilter::Quick(active) if active == tag => FeedFilter::None,
            _ => FeedFilter::Quick(tag.to_string()),
        };
    }

    /// Apply the modal selection. An empty selection clears filtering.
    pub fn apply_multi(&mut self, filters: ActiveFilters) {
        *self = if filters.is_empty() {
            FeedFilter::None
        } else {
            FeedFilter::Multi(filters)
        };
    }

    pub fn clear(&mut self) {
        *self = FeedFilter::None;
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, FeedFilter::None)
    }

    pub fn active_tag(&self) -> Option<&str> {
        match self {
            FeedFilter::Quick(tag) => Some(tag),
            _ => None,
        }
    }

    /// Modal selection, empty unless the multi filter is active.
    pub fn modal_selection(&self) -> ActiveFilters {
        match self {
            FeedFilter::Multi(filters) => filters.clone(),
            _ => ActiveFilters::default(),
        }
    }

    pub fn is_visible(&self, outfit: &Outfit) -> bool {
        match self {
            FeedFilter::None => true,
            FeedFilter::Quick(tag) => outfit.category_string().contains(tag.as_str()),
            FeedFilter::Multi(filters) => filters.matches(outfit),
        }
    }

    pub fn visible<'a>(&self, outfits: &'a [Outfit]) -> Vec<&'a Outfit> {
        outfits.iter().filter(|o| self.is_visible(o)).collect()
    }

    /// Number of modal selections in effect.
    pub fn count(&self) -> usize {
        match self {
            FeedFilter::Multi(filters) => filters.count(),
            _ => 0,
        }
    }

    /// Text of the filter button.
    pub fn button_label(&self) -> String {
        match self.count() {
            0 => "Filter Styles".to_string(),
            n => format!("Filter Styles ({})", n),
        }
    }
}

/// Toast shown after the modal filter is applied, if anything was selected.
pub fn applied_message(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("Applied 1 filter".to_string()),
        n => Some(format!("Applied {} filters", n)),
    }
}
