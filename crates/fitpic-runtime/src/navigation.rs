//! Page transitions, onboarding steps and the slide-out menu.

use fitpic_engine::{pagination, profile};
use fitpic_types::{ONBOARDING_STEPS, OutfitId, PageId, Tab, fields};

use crate::app::{App, Core};
use crate::config::ms;
use crate::events::UiEvent;
use crate::tasks::Scope;

impl App {
    /// Transition to `page`.
    ///
    /// The current page gets its exit event immediately and the menu is
    /// collapsed; the switch itself lands after the page transition delay.
    /// A newer transition replaces a pending one.
    pub fn show_page(&self, page: PageId) {
        let mut core = self.lock();
        self.show_page_locked(&mut core, page);
    }

    pub(crate) fn show_page_locked(&self, core: &mut Core, page: PageId) {
        let from = *core.store.get(fields::CURRENT_PAGE);
        self.emit(UiEvent::PageExiting { page: from });
        self.collapse_navigation_locked(core);
        if from != page {
            self.leave_page_locked(core, from);
        }

        core.scopes.get_mut(Scope::Transition).cancel();
        let delay = ms(self.config().timings.page_transition_ms);
        self.after(core, Scope::Transition, delay, move |app, core| {
            core.store.set(fields::CURRENT_PAGE, page);
            tracing::debug!(page = %page, "Page shown");
            app.emit(UiEvent::PageShown {
                page,
                nav_item: page.nav_item(),
            });
        });
    }

    /// Stop the timers that only make sense while `page` is on screen.
    fn leave_page_locked(&self, core: &mut Core, page: PageId) {
        match page {
            PageId::Processing => core.scopes.get_mut(Scope::Processing).cancel(),
            PageId::Home => {
                core.scopes.get_mut(Scope::Feed).cancel();
                if *core.store.get(fields::IS_LOADING) {
                    core.store.set(fields::IS_LOADING, false);
                }
            }
            _ => {}
        }
    }

    fn set_navigation_visible(&self, visible: bool) {
        self.emit(UiEvent::NavigationVisible { visible });
    }

    fn navigate_locked(&self, core: &mut Core, page: PageId) {
        self.show_page_locked(core, page);
        self.set_navigation_visible(page.shows_navigation());
    }

    pub fn navigate_to_entry(&self) {
        let mut core = self.lock();
        self.navigate_to_entry_locked(&mut core);
    }

    pub(crate) fn navigate_to_entry_locked(&self, core: &mut Core) {
        self.navigate_locked(core, PageId::Entry);
    }

    /// Start onboarding from step 1.
    pub fn navigate_to_onboarding(&self) {
        let mut core = self.lock();
        self.navigate_locked(&mut core, PageId::Onboarding);
        core.scopes.get_mut(Scope::Step).cancel();
        core.store.set(fields::CURRENT_STEP, 1);
        self.emit(UiEvent::StepShown { step: 1 });
    }

    /// Show the processing page and start the simulated analysis.
    pub fn navigate_to_processing(&self) {
        let mut core = self.lock();
        self.navigate_locked(&mut core, PageId::Processing);
        self.start_processing_locked(&mut core);
    }

    /// Show the home page; the feed initializes shortly after.
    pub fn navigate_to_home(&self) {
        let mut core = self.lock();
        self.navigate_to_home_locked(&mut core);
    }

    pub(crate) fn navigate_to_home_locked(&self, core: &mut Core) {
        self.navigate_locked(core, PageId::Home);
        let delay = ms(self.config().timings.home_feed_delay_ms);
        self.after(core, Scope::Feed, delay, |app, core| {
            app.initialize_feed_locked(core);
        });
    }

    pub fn navigate_to_outfit_detail(&self, outfit_id: OutfitId) {
        let mut core = self.lock();
        if core.catalog.get(outfit_id).is_none() {
            tracing::warn!(outfit_id, "Outfit not found");
            return;
        }
        core.store.set(fields::CURRENT_OUTFIT_ID, outfit_id);
        self.navigate_locked(&mut core, PageId::OutfitDetail);
    }

    /// Menu navigation: collapse the menu, then go to the tab's page.
    pub fn navigate_to_tab(&self, name: &str) {
        let tab = match name.parse::<Tab>() {
            Ok(tab) => tab,
            Err(err) => {
                tracing::warn!("{}", err);
                return;
            }
        };

        let mut core = self.lock();
        self.collapse_navigation_locked(&mut core);
        match tab {
            Tab::Outfits => self.navigate_to_home_locked(&mut core),
            Tab::Favs => {
                self.navigate_locked(&mut core, tab.page());
                self.seed_collections_locked(&mut core);
            }
            _ => self.navigate_locked(&mut core, tab.page()),
        }
    }

    /// Advance onboarding by one step.
    ///
    /// The current step fades out first; the step counter moves when the
    /// fade completes and the new step fades in shortly after. Reaching the
    /// last step also refreshes the profile preview. Does nothing on the
    /// last step.
    pub fn next_step(&self) {
        let mut core = self.lock();
        let step = *core.store.get(fields::CURRENT_STEP);
        if step >= ONBOARDING_STEPS {
            return;
        }
        let target = step + 1;
        self.emit(UiEvent::StepFadingOut { step });

        core.scopes.get_mut(Scope::Step).cancel();
        let timings = self.config().timings.clone();
        self.after(&mut core, Scope::Step, ms(timings.step_fade_ms), move |app, core| {
            core.store.set(fields::CURRENT_STEP, target);
            app.after(core, Scope::Step, ms(timings.step_fade_in_ms), move |app, _| {
                app.emit(UiEvent::StepShown { step: target });
            });
            if target == ONBOARDING_STEPS {
                app.after(
                    core,
                    Scope::Step,
                    ms(timings.profile_preview_ms),
                    |app, core| {
                        app.emit(UiEvent::ProfilePreview(profile::preview(core.store.state())));
                    },
                );
            }
        });
    }

    /// Onboarding progress as a percentage of the steps.
    pub fn onboarding_progress(&self) -> f64 {
        let step = self.get(fields::CURRENT_STEP);
        f64::from(step) / f64::from(ONBOARDING_STEPS) * 100.0
    }

    pub fn toggle_navigation(&self) {
        let mut core = self.lock();
        self.toggle_navigation_locked(&mut core);
    }

    fn toggle_navigation_locked(&self, core: &mut Core) {
        let expanded = core.store.update(fields::NAVIGATION_EXPANDED, |expanded| {
            *expanded = !*expanded;
            *expanded
        });
        self.emit(UiEvent::MenuToggled { expanded });
    }

    pub fn expand_navigation(&self) {
        let mut core = self.lock();
        if !*core.store.get(fields::NAVIGATION_EXPANDED) {
            self.toggle_navigation_locked(&mut core);
        }
    }

    pub fn collapse_navigation(&self) {
        let mut core = self.lock();
        self.collapse_navigation_locked(&mut core);
    }

    fn collapse_navigation_locked(&self, core: &mut Core) {
        if *core.store.get(fields::NAVIGATION_EXPANDED) {
            self.toggle_navigation_locked(core);
        }
    }
}

/// Reset feed paging; used when the feed is rebuilt from page 1.
pub(crate) fn reset_paging(core: &mut Core) {
    core.store.update(fields::SCROLL, pagination::reset);
}
