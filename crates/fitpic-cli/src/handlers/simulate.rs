use anyhow::Result;
use std::time::Instant;

use fitpic_engine::profile::SelectionKind;
use fitpic_runtime::{AppBuilder, FixedOutcome, UiEvent};
use fitpic_store::MemoryStorage;
use fitpic_types::fields;

use super::{HandlerContext, settle_timeout};
use crate::args::Speed;
use crate::presentation::SimulationView;

const ONBOARDING_STEPS: u8 = 7;

const SAMPLE_PROFILE: [(SelectionKind, &str); 6] = [
    (SelectionKind::Brand, "COS"),
    (SelectionKind::Brand, "Everlane"),
    (SelectionKind::Event, "Work"),
    (SelectionKind::Event, "Date night"),
    (SelectionKind::Aesthetic, "Minimalist"),
    (SelectionKind::Aesthetic, "Classic"),
];

/// Walk a new user through onboarding, style processing and the whole feed
/// on in-memory storage. The user's own data is never touched.
pub fn handle(ctx: &HandlerContext, speed: Speed, fail: bool) -> Result<()> {
    let config = ctx.config.scaled(speed.factor());
    let timeout = settle_timeout(&config);
    let outcome = if fail {
        FixedOutcome::Fail
    } else {
        FixedOutcome::Succeed
    };

    ctx.block_on(async {
        let started = Instant::now();
        let (app, events) = AppBuilder::new(MemoryStorage::new())
            .config(config)
            .outcome(outcome)
            .start()?;
        let mut session = ctx.timeline(app, events);
        let app = session.app.clone();

        app.navigate_to_onboarding();
        session.settle(timeout).await?;
        for (kind, value) in SAMPLE_PROFILE {
            app.toggle_selection(kind, value);
        }
        for _ in 1..ONBOARDING_STEPS {
            app.next_step();
            session.settle(timeout).await?;
        }

        app.navigate_to_processing();
        session.settle(timeout).await?;

        if !app.processing_failed() {
            let pages = app.catalog().len();
            for _ in 0..pages {
                if !app.get(fields::HAS_MORE_OUTFITS) {
                    break;
                }
                app.load_more_outfits();
                session.settle(timeout).await?;
            }
        }

        let reached = app.current_page();
        let processing_failed = app.processing_failed();
        let feed = app.feed();
        let events = session.finish();
        let pages = events
            .iter()
            .filter_map(|event| match event {
                UiEvent::PageShown { page, .. } => Some(*page),
                _ => None,
            })
            .collect();

        let view = SimulationView {
            reached,
            processing_failed,
            pages,
            feed,
            elapsed_ms: started.elapsed().as_millis(),
        };
        ctx.render_timeline(view, events)
    })
}
