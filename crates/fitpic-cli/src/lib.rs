// NOTE: CLI Rationale
//
// Every command opens the same App the interactive client runs: state is
// loaded from the data directory, the command drives App operations, and the
// resulting UI events are printed (toasts in plain mode, the full list with
// --format json). Timed operations (checkout, add-all, remix refresh,
// processing) are awaited until no timer is pending, so a command never exits
// with half-applied state.

mod args;
mod commands;
mod handlers;
mod logging;
mod presentation;

pub use args::{
    CartCommand, Cli, CollectionsCommand, Commands, ConfigCommand, LogLevel, LookupCommand,
    OutputFormat, Speed, StateCommand, WishlistCommand,
};
pub use commands::run;
pub use logging::init_logging;
