use chrono::{DateTime, Utc};
use uuid::Uuid;

use fitpic_types::{AppState, Collection, OutfitId};

use crate::{Error, Result};

pub const DEFAULT_NAME_MAX_LEN: usize = 30;

const NEW_COLLECTION_ICON: &str = "📁";

/// Collections offered the first time the save modal opens on an empty store.
pub const DEFAULT_COLLECTIONS: [(&str, &str, &str); 3] = [
    ("favorites", "Favorites", "❤️"),
    ("work", "Work Outfits", "💼"),
    ("weekend", "Weekend Casual", "☕"),
];

/// Seed the default collections if the user has none. Returns whether
/// anything was added.
pub fn seed_defaults(state: &mut AppState) -> bool {
    let collections = &mut state.collections.user_collections;
    if !collections.is_empty() {
        return false;
    }
    collections.extend(DEFAULT_COLLECTIONS.iter().map(|(id, name, icon)| Collection {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        outfits: Vec::new(),
        created_at: None,
    }));
    true
}

/// Create a collection holding `outfit_id`.
///
/// The name is trimmed, must be non-empty, at most `max_len` characters, and
/// unique among existing names ignoring case.
pub fn create(
    state: &mut AppState,
    name: &str,
    outfit_id: OutfitId,
    max_len: usize,
    now: DateTime<Utc>,
) -> Result<Collection> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::rejected("Please enter a collection name"));
    }
    if name.chars().count() > max_len {
        return Err(Error::rejected(format!(
            "Collection name must be {} characters or fewer",
            max_len
        )));
    }

    let collections = &mut state.collections.user_collections;
    let lowered = name.to_lowercase();
    if collections.iter().any(|c| c.name.to_lowercase() == lowered) {
        return Err(Error::rejected("Collection name already exists"));
    }

    let collection = Collection {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        icon: NEW_COLLECTION_ICON.to_string(),
        outfits: vec![outfit_id],
        created_at: Some(now),
    };
    collections.push(collection.clone());
    Ok(collection)
}

pub fn created_message(collection: &Collection) -> String {
    format!("Created \"{}\" collection", collection.name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    Added { collection: String },
    Removed { collection: String },
}

impl Membership {
    pub fn message(&self) -> String {
        match self {
            Membership::Added { collection } => format!("Added to {}", collection),
            Membership::Removed { collection } => format!("Removed from {}", collection),
        }
    }
}

pub fn toggle_outfit(state: &mut AppState, collection_id: &str, outfit_id: OutfitId) -> Result<Membership> {
    let collection = state
        .collections
        .user_collections
        .iter_mut()
        .find(|c| c.id == collection_id)
        .ok_or_else(|| Error::UnknownCollection(collection_id.to_string()))?;

    let name = collection.name.clone();
    if let Some(pos) = collection.outfits.iter().position(|id| *id == outfit_id) {
        collection.outfits.remove(pos);
        Ok(Membership::Removed { collection: name })
    } else {
        collection.outfits.push(outfit_id);
        Ok(Membership::Added { collection: name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AppState {
        let mut state = AppState::default();
        assert!(seed_defaults(&mut state));
        state
    }

    #[test]
    fn test_seed_only_when_empty() {
        let mut state = seeded();
        assert_eq!(state.collections.user_collections.len(), 3);
        assert!(!seed_defaults(&mut state));
        assert_eq!(state.collections.user_collections[1].name, "Work Outfits");
    }

    #[test]
    fn test_duplicate_name_rejected_ignoring_case() {
        let mut state = seeded();
        create(&mut state, "Work", 1, DEFAULT_NAME_MAX_LEN, Utc::now()).unwrap();

        let err = create(&mut state, "  work ", 2, DEFAULT_NAME_MAX_LEN, Utc::now()).unwrap_err();
        assert_eq!(err.user_message(), Some("Collection name already exists"));
        assert_eq!(state.collections.user_collections.len(), 4);
    }

    #[test]
    fn test_create_trims_and_includes_outfit() {
        let mut state = AppState::default();
        let created = create(&mut state, "  Date Night  ", 6, DEFAULT_NAME_MAX_LEN, Utc::now()).unwrap();
        assert_eq!(created.name, "Date Night");
        assert_eq!(created.outfits, vec![6]);
        assert!(created.created_at.is_some());
        assert_eq!(created_message(&created), "Created \"Date Night\" collection");
    }

    #[test]
    fn test_blank_and_long_names_rejected() {
        let mut state = AppState::default();
        let blank = create(&mut state, "   ", 1, DEFAULT_NAME_MAX_LEN, Utc::now()).unwrap_err();
        assert_eq!(blank.user_message(), Some("Please enter a collection name"));

        let long = "x".repeat(31);
        assert!(create(&mut state, &long, 1, DEFAULT_NAME_MAX_LEN, Utc::now()).is_err());
        assert!(state.collections.user_collections.is_empty());
    }

    #[test]
    fn test_toggle_outfit_membership() {
        let mut state = seeded();
        let added = toggle_outfit(&mut state, "weekend", 8).unwrap();
        assert_eq!(added.message(), "Added to Weekend Casual");
        assert!(state.collections.user_collections[2].contains(8));

        let removed = toggle_outfit(&mut state, "weekend", 8).unwrap();
        assert_eq!(removed.message(), "Removed from Weekend Casual");
        assert!(matches!(toggle_outfit(&mut state, "gone", 8), Err(Error::UnknownCollection(_))));
    }
}
