//! One-shot actions on a single outfit, plus theme, export and account
//! deletion.

use anyhow::{Context, Result};
use std::path::Path;

use fitpic_catalog::{MODIFICATION_OPTIONS, SCHEDULE_OCCASIONS};
use fitpic_types::{OutfitId, fields};

use super::{HandlerContext, settle_timeout};
use crate::presentation::{Notice, OutfitView, ValueView};

pub fn rate(ctx: &HandlerContext, outfit_id: OutfitId, rating: u8) -> Result<()> {
    if !(1..=5).contains(&rating) {
        anyhow::bail!("Rating must be between 1 and 5, got {}", rating);
    }

    ctx.block_on(async {
        let session = ctx.open()?;
        let app = &session.app;
        if app.outfit(outfit_id).is_none() {
            anyhow::bail!("Outfit {} not found", outfit_id);
        }
        app.rate_outfit(outfit_id, rating);

        let Some(outfit) = app.outfit(outfit_id) else {
            anyhow::bail!("Outfit {} not found", outfit_id);
        };
        let notice = Notice::silent()
            .with("outfitId", outfit_id)
            .with("rating", outfit.rating)
            .with("reviews", outfit.reviews);
        ctx.render(notice, session.finish())
    })
}

pub fn schedule(ctx: &HandlerContext, outfit_id: OutfitId, day: &str, occasion: &str) -> Result<()> {
    if !SCHEDULE_OCCASIONS.contains(&occasion) {
        anyhow::bail!(
            "Unknown occasion '{}' (expected one of: {})",
            occasion,
            SCHEDULE_OCCASIONS.join(", ")
        );
    }

    ctx.block_on(async {
        let session = ctx.open()?;
        let app = &session.app;
        if app.outfit(outfit_id).is_none() {
            anyhow::bail!("Outfit {} not found", outfit_id);
        }
        app.set(fields::CURRENT_OUTFIT_ID, outfit_id);
        app.select_schedule_day(day);
        app.select_occasion(occasion);
        app.confirm_schedule();

        let scheduled = app.get(fields::SCHEDULED_OUTFITS);
        let notice = Notice::silent().with("scheduled", serde_json::to_value(scheduled)?);
        ctx.render(notice, session.finish())
    })
}

/// Remix an outfit and wait for the feed refresh that follows.
pub fn remix(ctx: &HandlerContext, outfit_id: OutfitId, modifications: &[String]) -> Result<()> {
    if let Some(unknown) = modifications
        .iter()
        .find(|m| !MODIFICATION_OPTIONS.contains(&m.as_str()))
    {
        anyhow::bail!(
            "Unknown modification '{}' (expected one of: {})",
            unknown,
            MODIFICATION_OPTIONS.join(", ")
        );
    }

    ctx.block_on(async {
        let mut session = ctx.open()?;
        let app = session.app.clone();
        if app.outfit(outfit_id).is_none() {
            anyhow::bail!("Outfit {} not found", outfit_id);
        }

        let before = app.get(fields::USER_REMIXES).len();
        app.set(fields::CURRENT_OUTFIT_ID, outfit_id);
        app.set(fields::SELECTED_MODIFICATIONS, Vec::new());
        for modification in modifications {
            app.toggle_modification(modification);
        }
        app.generate_remix();
        session.settle(settle_timeout(app.config())).await?;

        let remixes = app.get(fields::USER_REMIXES);
        let Some(remix) = remixes.last().filter(|_| remixes.len() > before) else {
            anyhow::bail!("Remix was not generated");
        };
        let view = OutfitView::new(remix.clone(), false, None);
        ctx.render(view, session.finish())
    })
}

pub fn toggle_theme(ctx: &HandlerContext) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        session.app.toggle_theme();
        let theme = session.app.get(fields::THEME);
        let notice = Notice::message(format!("Theme: {}", theme.as_str()))
            .with("theme", theme.as_str());
        ctx.render(notice, session.finish())
    })
}

/// Write the export to `output`, or print it.
pub fn export(ctx: &HandlerContext, output: Option<&Path>) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let json = session.app.export_data()?;

        match output {
            Some(path) => {
                std::fs::write(path, &json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let notice = Notice::message(format!("Exported to {}", path.display()))
                    .with("path", path.display().to_string());
                ctx.render(notice, session.finish())
            }
            None => {
                // Stdout carries only the document so it can be redirected
                session.finish();
                let value: serde_json::Value = serde_json::from_str(&json)?;
                ctx.render(ValueView(value), Vec::new())
            }
        }
    })
}

pub fn delete_account(ctx: &HandlerContext, confirmed: bool) -> Result<()> {
    if !confirmed {
        anyhow::bail!("This deletes all your data; pass --yes to confirm");
    }

    ctx.block_on(async {
        let mut session = ctx.open()?;
        let app = session.app.clone();
        app.delete_account();
        session.settle(settle_timeout(app.config())).await?;
        ctx.render(Notice::silent(), session.finish())
    })
}
