mod events;
mod renderer;
mod style;
mod views;

pub use events::describe;
pub use renderer::{CommandResult, ConsoleRenderer};
pub use views::{
    CartView, CollectionsView, LookupView, Notice, OutfitPageView, OutfitRow, OutfitView,
    SimulationView, ValueView,
};
