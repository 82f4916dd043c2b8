//! Paged outfit feed with infinite scroll and client-side filtering.

use fitpic_engine::filter::{self, ActiveFilters};
use fitpic_engine::pagination;
use fitpic_types::{PageId, fields};

use crate::app::{App, Core};
use crate::config::ms;
use crate::events::UiEvent;
use crate::navigation::reset_paging;
use crate::tasks::Scope;

/// Placeholder cards shown while the first page loads.
const SKELETON_COUNT: usize = 3;

impl App {
    /// Rebuild the feed from page 1. Only runs while the home page is
    /// current.
    pub fn initialize_feed(&self) {
        let mut core = self.lock();
        self.initialize_feed_locked(&mut core);
    }

    pub(crate) fn initialize_feed_locked(&self, core: &mut Core) {
        if *core.store.get(fields::CURRENT_PAGE) != PageId::Home {
            tracing::debug!("Feed not initialized: home page is not current");
            return;
        }
        let delay = ms(self.config().timings.feed_initial_ms);
        self.rebuild_feed_locked(core, delay);
    }

    /// Pull-to-refresh: rebuild the feed from page 1 after a short delay.
    pub fn refresh_feed(&self) {
        let mut core = self.lock();
        self.refresh_feed_locked(&mut core);
    }

    pub(crate) fn refresh_feed_locked(&self, core: &mut Core) {
        let delay = ms(self.config().timings.feed_refresh_ms);
        self.rebuild_feed_locked(core, delay);
    }

    fn rebuild_feed_locked(&self, core: &mut Core, delay: std::time::Duration) {
        core.scopes.get_mut(Scope::Feed).cancel();
        reset_paging(core);
        self.emit(UiEvent::FeedSkeletons {
            count: SKELETON_COUNT,
        });
        self.after(core, Scope::Feed, delay, |app, core| {
            core.feed.clear();
            app.emit(UiEvent::FeedCleared);
            app.load_more_locked(core);
        });
    }

    /// Load the next page of outfits.
    ///
    /// Ignored while a load is in flight or once the catalog is exhausted.
    pub fn load_more_outfits(&self) {
        let mut core = self.lock();
        self.load_more_locked(&mut core);
    }

    pub(crate) fn load_more_locked(&self, core: &mut Core) {
        let scroll = core.store.get(fields::SCROLL);
        if scroll.is_loading || !scroll.has_more_outfits {
            return;
        }
        let Some(range) = core.store.update(fields::SCROLL, pagination::begin_load) else {
            return;
        };
        self.emit(UiEvent::FeedLoading { loading: true });

        let delay = ms(self.config().timings.feed_load_ms);
        self.after(core, Scope::Feed, delay, move |app, core| {
            let outfits = core.catalog.range(range.start, range.end).to_vec();
            let total = core.catalog.len();
            let more = core
                .store
                .update(fields::SCROLL, |scroll| pagination::complete_load(scroll, range, total));
            core.feed.extend(outfits.iter().map(|outfit| outfit.id));
            tracing::debug!(
                page = range.page,
                loaded = outfits.len(),
                more,
                "Feed page loaded"
            );

            app.emit(UiEvent::FeedLoading { loading: false });
            app.emit(UiEvent::FeedAppended { outfits });
            if core.filter.is_active() {
                app.emit_filtered(core);
            }
            if !more {
                app.emit(UiEvent::FeedEnd);
            }
        });
    }

    /// Scroll position report from the view. Loads the next page when the
    /// viewport is within the configured threshold of the bottom.
    pub fn on_scroll(&self, scroll_top: f64, client_height: f64, scroll_height: f64) {
        let threshold = self.config().limits.scroll_threshold;
        if pagination::near_bottom(scroll_top, client_height, scroll_height, threshold) {
            self.load_more_outfits();
        }
    }

    /// Quick-filter chip. Selecting the active tag again clears the filter.
    pub fn apply_quick_filter(&self, tag: &str) {
        let mut core = self.lock();
        core.filter.apply_quick(tag);
        self.emit_filtered(&core);
    }

    /// Apply the filter modal's selection.
    pub fn apply_filters(&self, filters: ActiveFilters) {
        let mut core = self.lock();
        core.filter.apply_multi(filters);
        self.emit_filtered(&core);
        if let Some(message) = filter::applied_message(core.filter.count()) {
            self.toast(message);
        }
    }

    pub fn clear_filters(&self) {
        let mut core = self.lock();
        core.filter.clear();
        self.emit_filtered(&core);
    }

    fn emit_filtered(&self, core: &Core) {
        self.emit(UiEvent::FeedFiltered {
            label: core.filter.button_label(),
            visible: core.visible_feed(),
        });
    }
}
