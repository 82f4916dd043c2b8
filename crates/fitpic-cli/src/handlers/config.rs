use anyhow::Result;

use fitpic_runtime::AppConfig;

use super::HandlerContext;
use crate::presentation::{LookupView, Notice};

/// Effective configuration: file values over defaults.
pub fn show(ctx: &HandlerContext) -> Result<()> {
    let text = toml::to_string_pretty(&ctx.config)?;
    let lines = std::iter::once(format!("# {}", ctx.config_path().display()))
        .chain(text.lines().map(str::to_string))
        .collect();
    ctx.render(LookupView::new(serde_json::to_value(&ctx.config)?, lines), Vec::new())
}

pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::default().save_to(&path)?;
    let notice = Notice::message(format!("Wrote {}", path.display()))
        .with("path", path.display().to_string());
    ctx.render(notice, Vec::new())
}
