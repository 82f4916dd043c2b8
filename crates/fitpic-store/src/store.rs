use std::time::Duration;

use serde_json::{Map, Value};

use fitpic_types::{AppState, Field};

use crate::cache::PathCache;
use crate::path::{assign, merge_state, parse_path, resolve};
use crate::storage::KeyValueStorage;

/// Storage key holding the complete state snapshot.
pub const STATE_KEY: &str = "fitpic-app-state";

/// Storage key the raw snapshot is copied to when part of it is unreadable.
pub const BACKUP_KEY: &str = "fitpic-app-state-backup";

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);

/// Owner of the application state.
///
/// Every write, typed or by path, invalidates the whole read cache and
/// persists the complete snapshot under [`STATE_KEY`]. Persistence failures
/// are logged and the in-memory state is kept.
pub struct StateStore {
    pub(crate) state: AppState,
    pub(crate) storage: Box<dyn KeyValueStorage>,
    cache: PathCache,
}

impl StateStore {
    /// A store holding default state. Nothing is read from storage.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            state: AppState::default(),
            storage,
            cache: PathCache::new(DEFAULT_CACHE_TTL),
        }
    }

    /// Load the persisted snapshot over defaults, then fold in legacy keys.
    pub fn open(storage: Box<dyn KeyValueStorage>, cache_ttl: Duration) -> Self {
        let mut store = Self::new(storage).with_cache_ttl(cache_ttl);
        store.load();
        store.migrate_legacy();
        store
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = PathCache::new(ttl);
        self
    }

    /// Deep-merge the persisted snapshot over the current state.
    ///
    /// Values that do not fit the state model are skipped one field at a
    /// time, so the rest of the snapshot still applies. Whenever anything
    /// is skipped, the raw snapshot is copied to [`BACKUP_KEY`] before the
    /// next write replaces it.
    ///
    /// Returns `false` when there is no snapshot or nothing of it could be
    /// parsed; the current state is left untouched in that case.
    pub fn load(&mut self) -> bool {
        let raw = match self.storage.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(err) => {
                tracing::error!("Failed to load state: {}", err);
                return false;
            }
        };

        let saved = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(saved)) => saved,
            Ok(other) => {
                tracing::error!("Failed to load state: expected an object, got {}", other);
                self.back_up(&raw);
                return false;
            }
            Err(err) => {
                tracing::error!("Failed to load state: {}", err);
                self.back_up(&raw);
                return false;
            }
        };

        let mut image = match serde_json::to_value(&self.state) {
            Ok(image) => image,
            Err(err) => {
                tracing::error!("Failed to load state: {}", err);
                return false;
            }
        };
        let mut skipped = Vec::new();
        for (key, value) in saved {
            merge_lenient(&mut image, &mut vec![key], value, &mut skipped);
        }

        match serde_json::from_value::<AppState>(image) {
            Ok(state) => {
                self.state = state;
                self.cache.clear();
                if !skipped.is_empty() {
                    tracing::warn!(?skipped, "Ignored snapshot values that do not fit the state");
                    self.back_up(&raw);
                }
                tracing::debug!("Loaded persisted state");
                true
            }
            Err(err) => {
                tracing::error!("Failed to load state: {}", err);
                self.back_up(&raw);
                false
            }
        }
    }

    fn back_up(&self, raw: &str) {
        match self.storage.set(BACKUP_KEY, raw) {
            Ok(()) => tracing::warn!(key = BACKUP_KEY, "Saved a copy of the persisted snapshot"),
            Err(err) => tracing::error!("Failed to back up state: {}", err),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// JSON image of the whole state.
    pub fn snapshot(&self) -> Value {
        serde_json::to_value(&self.state).unwrap_or(Value::Null)
    }

    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    pub fn get<T>(&self, field: Field<T>) -> &T {
        field.get(&self.state)
    }

    pub fn set<T>(&mut self, field: Field<T>, value: T) {
        *field.get_mut(&mut self.state) = value;
        self.after_write(field.path());
    }

    pub fn update<T, R>(&mut self, field: Field<T>, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(field.get_mut(&mut self.state));
        self.after_write(field.path());
        out
    }

    /// Apply a change spanning several fields as one write.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let out = f(&mut self.state);
        self.after_write("*");
        out
    }

    /// Resolve a dot-path against the state, falling back to `default` when
    /// the path is malformed or any segment is absent.
    pub fn get_path(&mut self, path: &str, default: Value) -> Value {
        let Some(segments) = parse_path(path) else {
            tracing::warn!(path, "get_path: invalid path");
            return default;
        };

        if let Some(cached) = self.cache.get(path) {
            return cached;
        }

        let image = self.snapshot();
        match resolve(&image, &segments) {
            Some(value) => {
                self.cache.insert(path, value.clone());
                value.clone()
            }
            None => default,
        }
    }

    /// Write `value` at a dot-path.
    ///
    /// The result must still describe a valid [`AppState`] and the path must
    /// survive the round trip (paths outside the model are rejected).
    /// Returns `false` and leaves the state unchanged otherwise.
    pub fn set_path(&mut self, path: &str, value: Value) -> bool {
        let Some(segments) = parse_path(path) else {
            tracing::warn!(path, "set_path: invalid path");
            return false;
        };

        let mut image = self.snapshot();
        if !assign(&mut image, &segments, value) {
            tracing::warn!(path, "set_path: path crosses a non-object value");
            return false;
        }

        let next = match serde_json::from_value::<AppState>(image) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(path, "set_path: value does not fit the state model: {}", err);
                return false;
            }
        };

        let reserialized = serde_json::to_value(&next).unwrap_or(Value::Null);
        if resolve(&reserialized, &segments).is_none() {
            tracing::warn!(path, "set_path: path is not part of the state model");
            return false;
        }

        self.state = next;
        self.after_write(path);
        true
    }

    /// Restore defaults and persist them.
    pub fn reset(&mut self) {
        self.state = AppState::default();
        self.after_write("*");
        tracing::info!("State reset to defaults");
    }

    /// Remove every key from storage, then reset to defaults.
    pub fn clear_storage(&mut self) {
        if let Err(err) = self.storage.clear() {
            tracing::error!("Failed to clear storage: {}", err);
        }
        self.reset();
    }

    /// Serialize the full state to storage. Returns `false` on failure.
    pub fn persist(&self) -> bool {
        let result = serde_json::to_string(&self.state)
            .map_err(crate::Error::from)
            .and_then(|json| self.storage.set(STATE_KEY, &json));
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("Failed to save state: {}", err);
                false
            }
        }
    }

    pub fn cached_paths(&self) -> usize {
        self.cache.len()
    }

    fn after_write(&mut self, path: &str) {
        tracing::trace!(path, "State write");
        self.cache.clear();
        self.persist();
    }
}

/// Merge `value` at `path` into `image` if the result still reads back as
/// [`AppState`]. A rejected object is retried key by key so a bad field
/// only drops itself; rejected leaves are recorded in `skipped`.
fn merge_lenient(
    image: &mut Value,
    path: &mut Vec<String>,
    value: Value,
    skipped: &mut Vec<String>,
) {
    let mut candidate = image.clone();
    merge_state(&mut candidate, nest(path, value.clone()));
    if serde_json::from_value::<AppState>(candidate.clone()).is_ok() {
        *image = candidate;
        return;
    }

    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                path.push(key);
                merge_lenient(image, path, child, skipped);
                path.pop();
            }
        }
        _ => skipped.push(path.join(".")),
    }
}

/// Wrap `value` in one object per path segment.
fn nest(path: &[String], value: Value) -> Value {
    path.iter().rev().fold(value, |inner, key| {
        let mut map = Map::new();
        map.insert(key.clone(), inner);
        Value::Object(map)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use fitpic_types::fields;
    use serde_json::json;

    fn store() -> StateStore {
        StateStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_get_path_returns_default_for_unwritten_paths() {
        let mut store = store();
        assert_eq!(store.get_path("navigation.currentStep", json!(0)), json!(1));
        assert_eq!(store.get_path("navigation.nope", json!("d")), json!("d"));
        assert_eq!(store.get_path("", json!(null)), json!(null));
        assert_eq!(store.get_path("a..b", json!(3)), json!(3));
    }

    #[test]
    fn test_set_path_then_get_path() {
        let mut store = store();
        assert!(store.set_path("navigation.currentStep", json!(4)));
        assert_eq!(store.get_path("navigation.currentStep", json!(0)), json!(4));
        assert_eq!(store.state().navigation.current_step, 4);
    }

    #[test]
    fn test_set_path_rejects_values_outside_the_model() {
        let mut store = store();
        assert!(!store.set_path("navigation.currentStep", json!("four")));
        assert!(!store.set_path("navigation.unknownField", json!(1)));
        assert!(!store.set_path("navigation.currentStep.inner", json!(1)));
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn test_set_path_into_empty_option() {
        let mut store = store();
        assert!(store.set_path("interactions.profileDraft.brands", json!(["COS"])));
        let draft = store.state().interactions.profile_draft.as_ref().unwrap();
        assert_eq!(draft.brands, vec!["COS"]);
    }

    #[test]
    fn test_writes_clear_the_whole_cache() {
        let mut store = store();
        store.get_path("navigation.currentStep", json!(0));
        store.get_path("scroll.isLoading", json!(false));
        assert_eq!(store.cached_paths(), 2);

        store.set(fields::IS_LOADING, true);
        assert_eq!(store.cached_paths(), 0);
        assert_eq!(store.get_path("scroll.isLoading", json!(false)), json!(true));
    }

    #[test]
    fn test_typed_update_persists_snapshot() {
        let storage = MemoryStorage::new();
        let mut store = StateStore::new(Box::new(storage.clone()));
        store.update(fields::WISHLIST, |w| w.push(3));

        let saved: Value = serde_json::from_str(&storage.get(STATE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved["commerce"]["wishlist"], json!([3]));
    }
}
