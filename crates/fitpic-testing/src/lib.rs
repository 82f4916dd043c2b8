//! Testing infrastructure for fitpic integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured `fitpic` command
//! - `fixtures`: seed persisted state, legacy keys and config files
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
