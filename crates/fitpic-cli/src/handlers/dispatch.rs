use anyhow::Result;
use std::collections::BTreeMap;

use fitpic_runtime::Action;

use super::{HandlerContext, settle_timeout};
use crate::presentation::Notice;

/// Decode an attribute set the way a click on the element would, run it,
/// and wait for its timers.
pub fn handle(ctx: &HandlerContext, attributes: Vec<(String, String)>) -> Result<()> {
    let attributes: BTreeMap<String, String> = attributes.into_iter().collect();
    let action = Action::from_attributes(&attributes)?;
    tracing::debug!(?action, "Dispatching");

    ctx.block_on(async {
        let mut session = ctx.open_timeline()?;
        let app = session.app.clone();
        app.dispatch(action);
        session.settle(settle_timeout(app.config())).await?;

        let notice = Notice::silent().with("page", app.current_page().as_str());
        ctx.render_timeline(notice, session.finish())
    })
}
