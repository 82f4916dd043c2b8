use anyhow::{Context, Result};
use serde_json::Value;

use fitpic_store::{DEFAULT_CACHE_TTL, FileStorage, StateStore};

use super::HandlerContext;
use crate::presentation::{Notice, ValueView};

pub fn show(ctx: &HandlerContext) -> Result<()> {
    ctx.block_on(async {
        let session = ctx.open()?;
        let state = serde_json::to_value(session.app.state())?;
        ctx.render(ValueView(state), session.finish())
    })
}

pub fn get(ctx: &HandlerContext, path: &str, default: Option<&str>) -> Result<()> {
    let default = match default {
        Some(raw) => parse_value(raw),
        None => Value::Null,
    };

    ctx.block_on(async {
        let session = ctx.open()?;
        let value = session.app.get_path(path, default);
        ctx.render(ValueView(value), session.finish())
    })
}

pub fn set(ctx: &HandlerContext, path: &str, raw: &str) -> Result<()> {
    let value = parse_value(raw);

    ctx.block_on(async {
        let session = ctx.open()?;
        if !session.app.set_path(path, value.clone()) {
            anyhow::bail!("Rejected write to '{}': not a valid value for this path", path);
        }
        let notice = Notice::message(format!("Set {}", path))
            .with("path", path)
            .with("value", value);
        ctx.render(notice, session.finish())
    })
}

/// Restore defaults without touching other storage keys.
pub fn reset(ctx: &HandlerContext) -> Result<()> {
    let storage = FileStorage::open(&ctx.data_dir)
        .with_context(|| format!("Failed to open {}", ctx.data_dir.display()))?;
    let mut store = StateStore::open(Box::new(storage), DEFAULT_CACHE_TTL);
    store.reset();
    ctx.render(Notice::message("State reset to defaults"), Vec::new())
}

/// JSON if it parses, otherwise the raw text as a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("5"), Value::from(5));
        assert_eq!(parse_value("[1, 2]"), serde_json::json!([1, 2]));
        assert_eq!(parse_value("work"), Value::String("work".to_string()));
        assert_eq!(parse_value("\"dark\""), Value::String("dark".to_string()));
    }
}
