use anyhow::Result;

use fitpic_engine::cart;
use fitpic_runtime::App;
use fitpic_types::{OutfitId, fields};

use super::{HandlerContext, settle_timeout};
use crate::presentation::CartView;

fn cart_view(app: &App) -> CartView {
    let state = app.state();
    CartView {
        count: state.cart_item_count(),
        total: cart::total(&state),
        items: state.commerce.shopping_cart,
    }
}

fn ensure_item(app: &App, item_id: &str) -> Result<()> {
    let known = app
        .get(fields::SHOPPING_CART)
        .iter()
        .any(|item| item.id == item_id);
    if !known {
        anyhow::bail!("Cart item '{}' not found", item_id);
    }
    Ok(())
}

pub fn list(ctx: &HandlerContext) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let view = cart_view(&session.app);
        ctx.render(view, session.finish())
    })
}

/// Add one product (1-based position) or, without a position, every product
/// of the outfit after the usual delay.
pub fn add(ctx: &HandlerContext, outfit_id: OutfitId, product: Option<usize>) -> Result<()> {
    ctx.block_on(async {
        let mut session = ctx.open()?;
        let app = session.app.clone();
        let Some(outfit) = app.outfit(outfit_id) else {
            anyhow::bail!("Outfit {} not found", outfit_id);
        };

        match product {
            Some(position) => {
                let Some(product) = position
                    .checked_sub(1)
                    .and_then(|index| outfit.products.get(index))
                else {
                    anyhow::bail!(
                        "Outfit {} has no product {} (it has {})",
                        outfit_id,
                        position,
                        outfit.products.len()
                    );
                };
                app.add_to_cart(product, outfit_id);
            }
            None => {
                app.set(fields::CURRENT_OUTFIT_ID, outfit_id);
                app.add_all_to_cart();
                session.settle(settle_timeout(app.config())).await?;
            }
        }

        ctx.render(cart_view(&app), session.finish())
    })
}

pub fn set_quantity(ctx: &HandlerContext, item_id: &str, quantity: i64) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        ensure_item(&session.app, item_id)?;
        session.app.update_cart_quantity(item_id, quantity);
        let view = cart_view(&session.app);
        ctx.render(view, session.finish())
    })
}

pub fn remove(ctx: &HandlerContext, item_id: &str) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        ensure_item(&session.app, item_id)?;
        session.app.remove_from_cart(item_id);
        let view = cart_view(&session.app);
        ctx.render(view, session.finish())
    })
}

pub fn clear(ctx: &HandlerContext) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        session.app.clear_cart();
        let view = cart_view(&session.app);
        ctx.render(view, session.finish())
    })
}

pub fn checkout(ctx: &HandlerContext) -> Result<()> {
    ctx.block_on(async {
        let mut session = ctx.open()?;
        let app = session.app.clone();
        if app.get(fields::SHOPPING_CART).is_empty() {
            anyhow::bail!("Cart is empty");
        }
        app.checkout();
        session.settle(settle_timeout(app.config())).await?;
        ctx.render(cart_view(&app), session.finish())
    })
}
