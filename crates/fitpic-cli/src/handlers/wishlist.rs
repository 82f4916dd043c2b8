use anyhow::Result;

use fitpic_types::{OutfitId, fields};

use super::HandlerContext;
use crate::presentation::{Notice, OutfitPageView, OutfitRow};

pub fn list(ctx: &HandlerContext) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let app = &session.app;
        let outfits: Vec<OutfitRow> = app
            .get(fields::WISHLIST)
            .into_iter()
            .filter_map(|id| app.outfit(id))
            .map(|outfit| OutfitRow::new(&outfit, true))
            .collect();

        let view = OutfitPageView {
            page: 1,
            total_pages: 1,
            filter: format!("{} liked", outfits.len()),
            has_more: false,
            outfits,
        };
        ctx.render(view, session.finish())
    })
}

pub fn toggle(ctx: &HandlerContext, outfit_id: OutfitId) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        if session.app.outfit(outfit_id).is_none() {
            anyhow::bail!("Outfit {} not found", outfit_id);
        }
        let wishlisted = session.app.toggle_wishlist(outfit_id);
        let notice = Notice::silent()
            .with("outfitId", outfit_id)
            .with("wishlisted", wishlisted);
        ctx.render(notice, session.finish())
    })
}
