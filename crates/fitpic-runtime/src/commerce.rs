//! Cart, wishlist, collections, ratings, scheduling and remixes.
//!
//! Each operation applies one engine transition inside a single store write
//! and reports the outcome as toasts and [`UiEvent`]s.

use chrono::Utc;

use fitpic_engine::{cart, collections, ratings, remix, schedule, wishlist};
use fitpic_types::{OutfitId, Product, fields};

use crate::app::{App, Core};
use crate::config::ms;
use crate::events::UiEvent;
use crate::tasks::Scope;

impl App {
    /// Report an engine rejection to the user, or log anything else.
    fn report(&self, err: fitpic_engine::Error) {
        match err.user_message() {
            Some(message) => self.toast(message),
            None => tracing::warn!("{}", err),
        }
    }

    fn emit_cart_badge(&self, core: &Core) {
        self.emit(UiEvent::CartBadge {
            count: core.store.state().cart_item_count(),
        });
    }

    pub fn add_to_cart(&self, product: &Product, outfit_id: OutfitId) {
        let mut core = self.lock();
        self.add_to_cart_locked(&mut core, product, outfit_id);
    }

    fn add_to_cart_locked(&self, core: &mut Core, product: &Product, outfit_id: OutfitId) {
        let change = core
            .store
            .mutate(|state| cart::add(state, product, outfit_id, Utc::now()));
        self.toast(change.message());
        self.emit_cart_badge(core);
    }

    /// Add every product of the current outfit after a simulated delay.
    pub fn add_all_to_cart(&self) {
        let mut core = self.lock();
        let outfit_id = *core.store.get(fields::CURRENT_OUTFIT_ID);
        if core.catalog.get(outfit_id).is_none() {
            tracing::warn!(outfit_id, "Outfit not found");
            return;
        }

        self.emit(UiEvent::AddToCartPending { outfit_id });
        let delay = ms(self.config().timings.add_all_to_cart_ms);
        self.after(&mut core, Scope::Commerce, delay, move |app, core| {
            let products = match core.catalog.get(outfit_id) {
                Some(outfit) => outfit.products.clone(),
                None => Vec::new(),
            };
            for product in &products {
                app.add_to_cart_locked(core, product, outfit_id);
            }
            app.emit(UiEvent::AddToCartDone { outfit_id });
        });
    }

    pub fn update_cart_quantity(&self, item_id: &str, quantity: i64) {
        let mut core = self.lock();
        match core
            .store
            .mutate(|state| cart::set_quantity(state, item_id, quantity))
        {
            Ok(change) => {
                self.toast(change.message());
                self.emit_cart_badge(&core);
            }
            Err(err) => self.report(err),
        }
    }

    pub fn remove_from_cart(&self, item_id: &str) {
        let mut core = self.lock();
        match core.store.mutate(|state| cart::remove(state, item_id)) {
            Ok(change) => {
                self.toast(change.message());
                self.emit_cart_badge(&core);
            }
            Err(err) => self.report(err),
        }
    }

    pub fn clear_cart(&self) {
        let mut core = self.lock();
        core.store.mutate(cart::clear);
        self.toast("Cart cleared");
        self.emit_cart_badge(&core);
    }

    /// Simulated checkout: the cart empties after a short delay.
    pub fn checkout(&self) {
        let mut core = self.lock();
        self.toast(cart::checkout_message(core.store.state()));
        let delay = ms(self.config().timings.checkout_ms);
        self.after(&mut core, Scope::Commerce, delay, |app, core| {
            core.store.mutate(cart::clear);
            app.emit_cart_badge(core);
            app.toast(cart::ORDER_PLACED);
        });
    }

    pub fn toggle_wishlist(&self, outfit_id: OutfitId) -> bool {
        let mut core = self.lock();
        let wishlisted = core
            .store
            .mutate(|state| wishlist::toggle(state, outfit_id));
        self.emit(UiEvent::WishlistChanged {
            outfit_id,
            wishlisted,
        });
        self.toast(wishlist::message(wishlisted));
        wishlisted
    }

    /// Open the save-to-collection sheet for an outfit.
    pub fn open_collections(&self, outfit_id: OutfitId) {
        let mut core = self.lock();
        core.store.set(fields::CURRENT_OUTFIT_ID, outfit_id);
        self.seed_collections_locked(&mut core);
    }

    /// Create the default collections if the user has none yet.
    pub(crate) fn seed_collections_locked(&self, core: &mut Core) {
        if core.store.get(fields::USER_COLLECTIONS).is_empty() {
            core.store.mutate(collections::seed_defaults);
        }
        self.emit(UiEvent::CollectionsChanged {
            collections: core.store.get(fields::USER_COLLECTIONS).clone(),
        });
    }

    pub fn create_collection(&self, name: &str, outfit_id: OutfitId) {
        let mut core = self.lock();
        let max_len = self.config().limits.collection_name_max;
        match core
            .store
            .mutate(|state| collections::create(state, name, outfit_id, max_len, Utc::now()))
        {
            Ok(collection) => {
                self.toast(collections::created_message(&collection));
                self.emit(UiEvent::CollectionsChanged {
                    collections: core.store.get(fields::USER_COLLECTIONS).clone(),
                });
            }
            Err(err) => self.report(err),
        }
    }

    pub fn toggle_outfit_in_collection(&self, collection_id: &str, outfit_id: OutfitId) {
        let mut core = self.lock();
        match core
            .store
            .mutate(|state| collections::toggle_outfit(state, collection_id, outfit_id))
        {
            Ok(membership) => {
                self.toast(membership.message());
                self.emit(UiEvent::CollectionsChanged {
                    collections: core.store.get(fields::USER_COLLECTIONS).clone(),
                });
            }
            Err(err) => self.report(err),
        }
    }

    pub fn rate_outfit(&self, outfit_id: OutfitId, rating: u8) {
        let mut core = self.lock();
        let core = &mut *core;
        let catalog = &mut core.catalog;
        match core
            .store
            .mutate(|state| ratings::rate(state, catalog, outfit_id, rating))
        {
            Ok(update) => {
                self.toast(ratings::message(rating));
                self.emit(UiEvent::RatingChanged {
                    outfit_id: update.outfit_id,
                    rating: update.rating,
                    reviews: update.reviews,
                });
            }
            Err(err) => self.report(err),
        }
    }

    pub fn select_schedule_day(&self, day: &str) {
        let mut core = self.lock();
        core.store.mutate(|state| schedule::select_day(state, day));
        self.emit_schedule_selection(&core);
    }

    pub fn select_occasion(&self, occasion: &str) {
        let mut core = self.lock();
        core.store
            .mutate(|state| schedule::select_occasion(state, occasion));
        self.emit_schedule_selection(&core);
    }

    fn emit_schedule_selection(&self, core: &Core) {
        let state = core.store.state();
        self.emit(UiEvent::ScheduleSelection {
            day: state.ui.selected_schedule_day.clone(),
            occasion: state.ui.selected_occasion.clone(),
            ready: schedule::can_confirm(state),
        });
    }

    /// Schedule the current outfit for the selected day and occasion.
    pub fn confirm_schedule(&self) {
        let mut core = self.lock();
        match core.store.mutate(|state| schedule::confirm(state, Utc::now())) {
            Ok(scheduled) => {
                self.toast(schedule::message(&scheduled));
                self.emit_schedule_selection(&core);
            }
            Err(err) => self.report(err),
        }
    }

    pub fn cancel_schedule(&self) {
        let mut core = self.lock();
        core.store.mutate(schedule::cancel);
        self.emit_schedule_selection(&core);
    }

    pub fn toggle_modification(&self, modification: &str) {
        let mut core = self.lock();
        core.store
            .mutate(|state| remix::toggle_modification(state, modification));
        self.emit(UiEvent::ModificationsChanged {
            selected: core.store.get(fields::SELECTED_MODIFICATIONS).clone(),
        });
    }

    /// Remix the current outfit with the selected modifications. The feed
    /// refreshes shortly after so the remix shows up first.
    pub fn generate_remix(&self) {
        let mut core = self.lock();
        let confidence = remix::draw_confidence(&mut rand::thread_rng());
        let generated = {
            let core = &mut *core;
            let catalog = &mut core.catalog;
            core.store
                .mutate(|state| remix::generate(state, catalog, confidence))
        };
        match generated {
            Ok(outfit) => {
                tracing::info!(id = outfit.id, original = ?outfit.original_id, "Remix generated");
                self.toast(remix::REMIX_CREATED);
                self.emit(UiEvent::ModificationsChanged {
                    selected: Vec::new(),
                });
                let delay = ms(self.config().timings.remix_refresh_ms);
                self.after(&mut core, Scope::Feed, delay, |app, core| {
                    app.refresh_feed_locked(core);
                });
            }
            Err(err) => self.report(err),
        }
    }
}
