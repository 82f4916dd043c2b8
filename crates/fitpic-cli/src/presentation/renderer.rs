use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

use fitpic_runtime::UiEvent;

use super::style;

/// What a command produced: its own result plus the UI events the App
/// emitted while it ran.
#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub content: T,
    pub events: Vec<UiEvent>,
}

impl<T> CommandResult<T> {
    pub fn new(content: T, events: Vec<UiEvent>) -> Self {
        Self { content, events }
    }
}

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    /// JSON mode prints the whole result. Plain mode prints the content
    /// followed by any toasts.
    pub fn render<T>(&self, result: &CommandResult<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        print!("{}", result.content);

        for event in &result.events {
            if let UiEvent::Toast { message } = event {
                println!("{} {}", style::accent("»"), message);
            }
        }

        Ok(())
    }
}
