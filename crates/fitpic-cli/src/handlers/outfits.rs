use anyhow::Result;

use fitpic_engine::ActiveFilters;
use fitpic_types::{FilterCategory, OutfitId, fields};

use super::HandlerContext;
use crate::presentation::{OutfitPageView, OutfitRow, OutfitView};

/// Filter modal selection given on the command line.
pub struct FilterArgs {
    pub tag: Option<String>,
    pub location: Vec<String>,
    pub style: Vec<String>,
    pub event: Vec<String>,
    pub season: Vec<String>,
}

impl FilterArgs {
    fn selection(&self) -> ActiveFilters {
        let mut filters = ActiveFilters::new();
        let groups = [
            (FilterCategory::Location, &self.location),
            (FilterCategory::Style, &self.style),
            (FilterCategory::Event, &self.event),
            (FilterCategory::Season, &self.season),
        ];
        for (category, values) in groups {
            for value in values {
                filters.select(category, value.clone());
            }
        }
        filters
    }
}

pub fn list(ctx: &HandlerContext, page: u32, filter: FilterArgs) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let app = &session.app;

        if let Some(tag) = &filter.tag {
            app.apply_quick_filter(tag);
        }
        let selection = filter.selection();
        if !selection.is_empty() {
            app.apply_filters(selection);
        }

        let active = app.filter();
        let state = app.state();
        let catalog = app.catalog();
        let per_page = state.scroll.outfits_per_page.max(1) as usize;
        let total_pages = catalog.len().div_ceil(per_page).max(1);
        let page = page.max(1);
        let start = (page as usize - 1) * per_page;
        let end = (start + per_page).min(catalog.len());

        let outfits = catalog
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .filter(|outfit| active.is_visible(outfit))
            .map(|outfit| OutfitRow::new(outfit, state.is_wishlisted(outfit.id)))
            .collect();

        let view = OutfitPageView {
            page,
            total_pages: total_pages as u32,
            filter: active.button_label(),
            has_more: end < catalog.len(),
            outfits,
        };
        ctx.render(view, session.finish())
    })
}

/// Show an outfit and make it the current one, as opening its detail page
/// does.
pub fn show(ctx: &HandlerContext, id: OutfitId) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let app = &session.app;
        let Some(outfit) = app.outfit(id) else {
            anyhow::bail!("Outfit {} not found", id);
        };
        app.set(fields::CURRENT_OUTFIT_ID, id);

        let state = app.state();
        let view = OutfitView::new(
            outfit,
            state.is_wishlisted(id),
            state.interactions.user_ratings.get(&id).copied(),
        );
        ctx.render(view, session.finish())
    })
}
