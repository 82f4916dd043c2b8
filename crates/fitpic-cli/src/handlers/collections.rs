use anyhow::Result;

use fitpic_runtime::{App, UiEvent};
use fitpic_types::{OutfitId, fields};

use super::HandlerContext;
use crate::presentation::CollectionsView;

fn collections_view(app: &App) -> CollectionsView {
    CollectionsView {
        collections: app.get(fields::USER_COLLECTIONS),
    }
}

/// List collections, creating the defaults the first time.
pub fn list(ctx: &HandlerContext) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let current = session.app.get(fields::CURRENT_OUTFIT_ID);
        session.app.open_collections(current);
        let view = collections_view(&session.app);
        ctx.render(view, session.finish())
    })
}

pub fn create(ctx: &HandlerContext, name: &str, outfit_id: OutfitId) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        if session.app.outfit(outfit_id).is_none() {
            anyhow::bail!("Outfit {} not found", outfit_id);
        }
        let before = session.app.get(fields::USER_COLLECTIONS).len();
        session.app.create_collection(name, outfit_id);
        let view = collections_view(&session.app);
        let events = session.finish();
        if view.collections.len() == before {
            let reason = rejection(&events).unwrap_or("Collection was not created");
            anyhow::bail!("{}", reason);
        }
        ctx.render(view, events)
    })
}

pub fn toggle(ctx: &HandlerContext, collection_id: &str, outfit_id: OutfitId) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let known = session
            .app
            .get(fields::USER_COLLECTIONS)
            .iter()
            .any(|c| c.id == collection_id);
        if !known {
            anyhow::bail!("Collection '{}' not found", collection_id);
        }
        session.app.toggle_outfit_in_collection(collection_id, outfit_id);
        let view = collections_view(&session.app);
        ctx.render(view, session.finish())
    })
}

/// Message of the last toast, used as the error text for a refused write.
fn rejection(events: &[UiEvent]) -> Option<&str> {
    events.iter().rev().find_map(|event| match event {
        UiEvent::Toast { message } => Some(message.as_str()),
        _ => None,
    })
}
