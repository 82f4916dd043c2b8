//! Assertions over `--format json` output.
//!
//! Every JSON document has a `content` value and the `events` the command
//! produced.

use anyhow::{Context, Result};
use serde_json::Value;

fn events(json: &Value) -> Result<&Vec<Value>> {
    json["events"]
        .as_array()
        .context("Expected 'events' array in JSON")
}

/// Toast messages in the order they were shown.
pub fn toasts(json: &Value) -> Result<Vec<String>> {
    Ok(events(json)?
        .iter()
        .filter(|e| e["type"] == "toast")
        .filter_map(|e| e["message"].as_str().map(str::to_string))
        .collect())
}

pub fn assert_toast(json: &Value, expected: &str) -> Result<()> {
    let shown = toasts(json)?;
    if !shown.iter().any(|m| m == expected) {
        anyhow::bail!("Expected toast '{}', got {:?}", expected, shown);
    }
    Ok(())
}

/// Assert that an event of the given type was emitted.
pub fn assert_event(json: &Value, event_type: &str) -> Result<()> {
    if !events(json)?.iter().any(|e| e["type"] == event_type) {
        anyhow::bail!("Expected a '{}' event", event_type);
    }
    Ok(())
}

/// Assert the number of entries in the `content` array.
pub fn assert_content_len(json: &Value, expected: usize) -> Result<()> {
    let items = json["content"]
        .as_array()
        .context("Expected 'content' array in JSON")?;

    if items.len() != expected {
        anyhow::bail!("Expected {} items, got {}", expected, items.len());
    }

    Ok(())
}
