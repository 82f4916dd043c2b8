//! Simulated style analysis shown between onboarding and the feed.

use fitpic_catalog::{PROCESSING_ERROR, PROCESSING_INSIGHTS, PROCESSING_STEPS};
use fitpic_types::fields;

use crate::app::{App, Core};
use crate::config::ms;
use crate::events::UiEvent;
use crate::tasks::Scope;

impl App {
    /// Run the processing animation again after an error.
    pub fn retry_processing(&self) {
        let mut core = self.lock();
        self.start_processing_locked(&mut core);
    }

    pub(crate) fn start_processing_locked(&self, core: &mut Core) {
        let scope = core.scopes.get_mut(Scope::Processing);
        scope.cancel();
        let generation = scope.generation();

        core.store.mutate(|state| {
            state.processing.processing_index = 0;
            state.processing.insight_index = 0;
        });
        core.processing_failed = false;

        self.emit(UiEvent::ProcessingStarted);
        self.emit(UiEvent::ProcessingStep {
            index: 0,
            step: PROCESSING_STEPS.first().copied(),
        });
        self.emit(UiEvent::ProcessingInsight {
            index: 0,
            text: PROCESSING_INSIGHTS[0],
        });

        let fail = self.should_fail();
        tracing::debug!(fail, "Processing started");

        let app = self.clone();
        core.scopes
            .get_mut(Scope::Processing)
            .spawn(async move { app.run_processing_steps(generation, fail).await });
        let app = self.clone();
        core.scopes
            .get_mut(Scope::Processing)
            .spawn(async move { app.run_insight_cycle(generation).await });
    }

    async fn run_processing_steps(self, generation: u64, fail: bool) {
        let timings = self.config().timings.clone();

        loop {
            tokio::time::sleep(ms(timings.processing_step_ms)).await;
            let done = {
                let mut core = self.lock();
                if !core.scopes.get(Scope::Processing).is_current(generation) {
                    return;
                }
                let index = core.store.update(fields::PROCESSING_INDEX, |index| {
                    *index += 1;
                    *index
                });
                self.emit(UiEvent::ProcessingStep {
                    index,
                    step: PROCESSING_STEPS.get(index).copied(),
                });
                index >= PROCESSING_STEPS.len()
            };
            if done {
                break;
            }
        }

        let delay = if fail {
            timings.processing_error_delay_ms
        } else {
            timings.processing_final_delay_ms
        };
        tokio::time::sleep(ms(delay)).await;

        let mut core = self.lock();
        if !core.scopes.get(Scope::Processing).is_current(generation) {
            return;
        }
        if fail {
            tracing::info!("Processing failed");
            core.processing_failed = true;
            self.emit(UiEvent::ProcessingFailed {
                message: PROCESSING_ERROR,
            });
        } else {
            self.navigate_to_home_locked(&mut core);
        }
    }

    /// Rotate the insight text until the cutoff.
    async fn run_insight_cycle(self, generation: u64) {
        let timings = self.config().timings.clone();
        if timings.insight_interval_ms == 0 {
            return;
        }

        let mut elapsed = 0;
        loop {
            tokio::time::sleep(ms(timings.insight_interval_ms)).await;
            elapsed += timings.insight_interval_ms;
            if elapsed >= timings.insight_cutoff_ms {
                return;
            }

            let mut core = self.lock();
            if !core.scopes.get(Scope::Processing).is_current(generation) {
                return;
            }
            let index = core.store.update(fields::INSIGHT_INDEX, |index| {
                *index = (*index + 1) % PROCESSING_INSIGHTS.len();
                *index
            });
            self.emit(UiEvent::ProcessingInsight {
                index,
                text: PROCESSING_INSIGHTS[index],
            });
        }
    }
}
