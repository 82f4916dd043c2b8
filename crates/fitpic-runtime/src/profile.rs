//! Onboarding selections, theme, greeting and account data.

use chrono::{Datelike, Local, Timelike, Utc};

use fitpic_engine::export::{EXPORT_FILE_NAME, EXPORTED_MESSAGE};
use fitpic_engine::profile::{self, ProfilePreview, SelectionKind};
use fitpic_engine::UserDataExport;
use fitpic_types::fields;

use crate::app::App;
use crate::events::UiEvent;
use crate::Result;

const DRAFT_SAVED: &str = "Profile saved! You can continue later.";
const ACCOUNT_DELETED: &str = "Account deleted";

impl App {
    /// Flip an onboarding tag. Returns whether it is now selected; a
    /// selection past the group's limit is refused with a toast.
    pub fn toggle_selection(&self, kind: SelectionKind, value: &str) -> bool {
        let mut core = self.lock();
        match core
            .store
            .mutate(|state| profile::toggle_selection(state, kind, value))
        {
            Ok(selected) => selected,
            Err(err) => {
                if let Some(message) = err.user_message() {
                    self.toast(message);
                }
                false
            }
        }
    }

    /// Whether every onboarding tag group has enough selections.
    pub fn selections_complete(&self) -> bool {
        profile::selections_complete(self.lock().store.state())
    }

    pub fn save_profile_draft(&self) {
        let mut core = self.lock();
        let draft = core
            .store
            .mutate(|state| profile::save_draft(state, Utc::now()));
        tracing::debug!(
            brands = draft.brands.len(),
            events = draft.events.len(),
            aesthetics = draft.aesthetics.len(),
            "Profile draft saved"
        );
        self.toast(DRAFT_SAVED);
    }

    pub fn profile_preview(&self) -> ProfilePreview {
        profile::preview(self.lock().store.state())
    }

    pub fn style_score(&self) -> f64 {
        profile::style_score(self.lock().store.state())
    }

    pub fn toggle_theme(&self) {
        let mut core = self.lock();
        let theme = core.store.mutate(profile::toggle_theme);
        self.emit(UiEvent::ThemeChanged { theme });
    }

    /// Time-of-day greeting with a contextual recommendation and simulated
    /// weather.
    pub fn refresh_greeting(&self) {
        let now = Local::now();
        let hour = now.hour();
        self.emit(UiEvent::Greeting {
            text: profile::greeting(hour),
            recommendation: profile::contextual_recommendation(hour, now.weekday()),
            weather: profile::simulated_weather(&mut rand::thread_rng()),
        });
    }

    /// Serialize the user's data for download.
    pub fn export_data(&self) -> Result<String> {
        let json = {
            let core = self.lock();
            UserDataExport::from_state(core.store.state(), Utc::now()).to_pretty_json()?
        };
        self.emit(UiEvent::DataExported {
            file_name: EXPORT_FILE_NAME,
            json: json.clone(),
        });
        self.toast(EXPORTED_MESSAGE);
        Ok(json)
    }

    /// Wipe storage and state, then return to the entry page.
    pub fn delete_account(&self) {
        let mut core = self.lock();
        core.scopes.cancel_all();
        core.store.clear_storage();
        core.feed.clear();
        core.filter.clear();
        let per_page = self.config().limits.outfits_per_page.max(1);
        core.store.set(fields::OUTFITS_PER_PAGE, per_page);
        tracing::info!("Account deleted");

        self.emit(UiEvent::CartBadge { count: 0 });
        self.emit(UiEvent::ThemeChanged {
            theme: *core.store.get(fields::THEME),
        });
        self.toast(ACCOUNT_DELETED);
        self.navigate_to_entry_locked(&mut core);
    }
}
