// Application state store
// One owned AppState, typed and dot-path access, write-through persistence
// to a key-value storage backend.

mod cache;
mod error;
mod migrate;
mod path;
mod storage;
mod store;

// Public API
pub use error::{Error, Result};
pub use migrate::{LEGACY_KEYS, MigrationReport};
pub use path::{merge_state, parse_path};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{BACKUP_KEY, DEFAULT_CACHE_TTL, STATE_KEY, StateStore};
