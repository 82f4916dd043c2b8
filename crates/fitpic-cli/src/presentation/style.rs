//! ANSI styling that switches off when stdout is not a terminal or
//! `NO_COLOR` is set.

use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;
use std::fmt::Display;

static COLOR: Lazy<bool> =
    Lazy::new(|| std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none());

fn paint<T: Display>(value: T, styled: impl FnOnce(&T) -> String) -> String {
    if *COLOR {
        styled(&value)
    } else {
        value.to_string()
    }
}

pub fn bold<T: Display>(value: T) -> String {
    paint(value, |v| v.bold().to_string())
}

pub fn dim<T: Display>(value: T) -> String {
    paint(value, |v| v.dimmed().to_string())
}

pub fn accent<T: Display>(value: T) -> String {
    paint(value, |v| v.cyan().to_string())
}

pub fn good<T: Display>(value: T) -> String {
    paint(value, |v| v.green().to_string())
}

pub fn warn<T: Display>(value: T) -> String {
    paint(value, |v| v.yellow().to_string())
}

pub fn bad<T: Display>(value: T) -> String {
    paint(value, |v| v.red().to_string())
}
