// Application runtime
// Owns the state store and catalog behind one lock, drives every simulated
// latency with tokio timers, and reports changes as UiEvents.

mod app;
mod commerce;
mod dispatch;
mod error;
mod events;
mod feed;
mod navigation;
mod outcome;
mod processing;
mod profile;
mod tasks;

pub mod config;

// Public API
pub use app::{App, AppBuilder};
pub use config::{AppConfig, Limits, ProcessingConfig, Timings, resolve_data_dir};
pub use dispatch::{Action, NavTarget};
pub use error::{Error, Result};
pub use events::{UiEvent, UiEventStream};
pub use outcome::{FixedOutcome, OutcomeProvider, RandomOutcome};
