use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;

use fitpic_catalog::Catalog;
use fitpic_engine::{FeedFilter, ratings};
use fitpic_store::{KeyValueStorage, StateStore};
use fitpic_types::{AppState, Field, Outfit, OutfitId, PageId, fields};

use crate::config::{AppConfig, ms};
use crate::events::{UiEvent, UiEventStream};
use crate::outcome::{OutcomeProvider, RandomOutcome};
use crate::tasks::{Scope, Scopes};
use crate::Result;

/// Everything guarded by the app lock.
///
/// The lock is never held across an await: timer tasks sleep unlocked, then
/// take the lock, check their scope generation, and mutate.
pub(crate) struct Core {
    pub store: StateStore,
    pub catalog: Catalog,
    pub filter: FeedFilter,
    /// Outfits currently rendered in the feed, in display order
    pub feed: Vec<OutfitId>,
    pub processing_failed: bool,
    pub scopes: Scopes,
}

impl Core {
    pub fn visible_feed(&self) -> Vec<OutfitId> {
        self.feed
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .filter(|outfit| self.filter.is_visible(outfit))
            .map(|outfit| outfit.id)
            .collect()
    }
}

struct Inner {
    core: Mutex<Core>,
    events: UnboundedSender<UiEvent>,
    config: AppConfig,
    outcome: Box<dyn OutcomeProvider>,
}

/// Handle to a running FitPic session.
///
/// Cheap to clone; all clones drive the same state. Operations that involve
/// simulated latency spawn tokio tasks and must be called from within a
/// tokio runtime.
#[derive(Clone)]
pub struct App {
    inner: Arc<Inner>,
}

pub struct AppBuilder {
    storage: Box<dyn KeyValueStorage>,
    config: AppConfig,
    catalog: Option<Catalog>,
    outcome: Option<Box<dyn OutcomeProvider>>,
}

impl AppBuilder {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            config: AppConfig::default(),
            catalog: None,
            outcome: None,
        }
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a catalog other than the built-in outfit data.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn outcome(mut self, outcome: impl OutcomeProvider + 'static) -> Self {
        self.outcome = Some(Box::new(outcome));
        self
    }

    /// Load persisted state, restore user content into the catalog and
    /// show the entry page.
    pub fn start(self) -> Result<(App, UiEventStream)> {
        let config = self.config;
        let mut store = StateStore::open(self.storage, ms(config.limits.cache_ttl_ms));
        let mut catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::builtin()?,
        };

        let restored = catalog.restore_remixes(&store.state().collections.user_remixes);
        ratings::restore(store.state(), &mut catalog);
        tracing::info!(
            outfits = catalog.len(),
            remixes = restored,
            "Catalog ready"
        );

        let per_page = config.limits.outfits_per_page.max(1);
        store.mutate(|state| {
            state.scroll.outfits_per_page = per_page;
            state.scroll.is_loading = false;
            state.navigation.current_page = PageId::Entry;
            state.ui.is_navigation_expanded = false;
        });

        let outcome = self
            .outcome
            .unwrap_or_else(|| Box::new(RandomOutcome::new(config.processing.error_probability)));

        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let app = App {
            inner: Arc::new(Inner {
                core: Mutex::new(Core {
                    store,
                    catalog,
                    filter: FeedFilter::None,
                    feed: Vec::new(),
                    processing_failed: false,
                    scopes: Scopes::default(),
                }),
                events: tx,
                config,
                outcome,
            }),
        };

        {
            let core = app.lock();
            let state = core.store.state();
            app.emit(UiEvent::ThemeChanged {
                theme: state.user_profile.preferences.theme,
            });
            app.emit(UiEvent::CartBadge {
                count: state.cart_item_count(),
            });
            app.emit(UiEvent::PageShown {
                page: PageId::Entry,
                nav_item: None,
            });
            app.emit(UiEvent::NavigationVisible { visible: false });
        }
        app.refresh_greeting();

        Ok((app, UiEventStream::new(rx)))
    }
}

impl App {
    pub(crate) fn lock(&self) -> MutexGuard<'_, Core> {
        self.inner
            .core
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn emit(&self, event: UiEvent) {
        if self.inner.events.send(event).is_err() {
            tracing::trace!("UI event dropped: stream closed");
        }
    }

    pub(crate) fn toast(&self, message: impl Into<String>) {
        self.emit(UiEvent::toast(message));
    }

    pub(crate) fn should_fail(&self) -> bool {
        self.inner.outcome.should_fail()
    }

    /// Run `f` after `delay` unless `scope` is cancelled first.
    pub(crate) fn after<F>(&self, core: &mut Core, scope: Scope, delay: Duration, f: F)
    where
        F: FnOnce(&App, &mut Core) + Send + 'static,
    {
        let generation = core.scopes.get(scope).generation();
        let app = self.clone();
        core.scopes.get_mut(scope).spawn(async move {
            tokio::time::sleep(delay).await;
            let mut core = app.lock();
            if !core.scopes.get(scope).is_current(generation) {
                return;
            }
            f(&app, &mut *core);
        });
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Copy of the current state.
    pub fn state(&self) -> AppState {
        self.lock().store.state().clone()
    }

    pub fn get<T: Clone>(&self, field: Field<T>) -> T {
        self.lock().store.get(field).clone()
    }

    pub fn set<T>(&self, field: Field<T>, value: T) {
        self.lock().store.set(field, value);
    }

    /// Read a dot-path of the state, returning `default` when it is unset.
    pub fn get_path(&self, path: &str, default: Value) -> Value {
        self.lock().store.get_path(path, default)
    }

    /// Write a dot-path of the state. Returns `false` if the write was
    /// rejected.
    pub fn set_path(&self, path: &str, value: Value) -> bool {
        self.lock().store.set_path(path, value)
    }

    pub fn outfit(&self, id: OutfitId) -> Option<Outfit> {
        self.lock().catalog.get(id).cloned()
    }

    pub fn catalog(&self) -> Vec<Outfit> {
        self.lock().catalog.as_slice().to_vec()
    }

    /// Ids of the outfits rendered in the feed.
    pub fn feed(&self) -> Vec<OutfitId> {
        self.lock().feed.clone()
    }

    /// Rendered outfits that pass the active filter.
    pub fn visible_feed(&self) -> Vec<OutfitId> {
        self.lock().visible_feed()
    }

    pub fn filter(&self) -> FeedFilter {
        self.lock().filter.clone()
    }

    pub fn current_page(&self) -> PageId {
        self.get(fields::CURRENT_PAGE)
    }

    /// Whether the last processing run ended in the error state.
    pub fn processing_failed(&self) -> bool {
        self.lock().processing_failed
    }

    /// Whether no timer is pending.
    pub fn is_idle(&self) -> bool {
        self.lock().scopes.is_idle()
    }

    /// Cancel every pending timer.
    pub fn shutdown(&self) {
        self.lock().scopes.cancel_all();
    }
}
