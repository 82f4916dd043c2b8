use serde_json::Value;

use crate::StateStore;

/// Storage keys written by earlier versions, and where their data lives now.
///
/// Two keys feed `collections.userCollections`; when both are present the
/// later entry wins.
pub const LEGACY_KEYS: &[(&str, &str)] = &[
    ("fitpic-theme", "userProfile.preferences.theme"),
    ("fitpic-user-profile", "userProfile"),
    ("fitpic-cart", "commerce.shoppingCart"),
    ("fitpic-wishlist", "commerce.wishlist"),
    ("userRatings", "interactions.userRatings"),
    ("scheduledOutfits", "collections.scheduledOutfits"),
    ("userRemixes", "collections.userRemixes"),
    ("userCollections", "collections.userCollections"),
    ("fitpic-profile-draft", "interactions.profileDraft"),
    ("fitpic-collections", "collections.userCollections"),
    ("fitpic-preferences", "userProfile.preferences"),
    ("fitpic-saved-outfits", "collections.savedOutfits"),
];

/// Keys stored as a bare string rather than JSON.
const RAW_STRING_KEYS: &[&str] = &["fitpic-theme"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: Vec<String>,
    pub failed: Vec<String>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.migrated.is_empty() && self.failed.is_empty()
    }
}

impl StateStore {
    /// Move data from legacy keys into the unified state.
    ///
    /// A key is deleted only after its value was written; keys that fail to
    /// parse or do not fit the model are logged and left in place.
    pub fn migrate_legacy(&mut self) -> MigrationReport {
        let mut report = MigrationReport::default();

        for (key, path) in LEGACY_KEYS {
            let raw = match self.storage.get(key) {
                Ok(Some(raw)) if !raw.is_empty() => raw,
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!("Failed to read legacy key {}: {}", key, err);
                    report.failed.push(key.to_string());
                    continue;
                }
            };

            let value = if RAW_STRING_KEYS.contains(key) {
                Value::String(raw)
            } else {
                match serde_json::from_str::<Value>(&raw) {
                    Ok(value) => value,
                    Err(err) => {
                        tracing::warn!("Failed to migrate {}: {}", key, err);
                        report.failed.push(key.to_string());
                        continue;
                    }
                }
            };

            if !self.set_path(path, value) {
                tracing::warn!("Failed to migrate {}: value rejected at {}", key, path);
                report.failed.push(key.to_string());
                continue;
            }

            if let Err(err) = self.storage.remove(key) {
                tracing::warn!("Migrated {} but could not remove it: {}", key, err);
            }
            report.migrated.push(key.to_string());
        }

        if !report.migrated.is_empty() {
            tracing::info!(
                count = report.migrated.len(),
                "Migrated old storage data to unified state"
            );
        }
        report
    }
}
