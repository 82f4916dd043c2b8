//! User-facing copy for the processing screen and modal option lists.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessingStep {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const PROCESSING_STEPS: [ProcessingStep; 4] = [
    ProcessingStep {
        title: "Analyzing your style...",
        subtitle: "Understanding your preferences and body type",
    },
    ProcessingStep {
        title: "Understanding your preferences...",
        subtitle: "Learning from your style choices",
    },
    ProcessingStep {
        title: "Generating your looks...",
        subtitle: "Creating personalized outfit suggestions",
    },
    ProcessingStep {
        title: "Adding finishing touches...",
        subtitle: "Preparing your style profile",
    },
];

pub const PROCESSING_INSIGHTS: [&str; 6] = [
    "Learning your color preferences...",
    "Mapping your brand affinity...",
    "Understanding your lifestyle...",
    "Personalizing recommendations...",
    "Calibrating style confidence...",
    "Finalizing your profile...",
];

pub const PROCESSING_ERROR: &str = "Oops! Something didn't go quite right.";

/// Occasion keys offered by the schedule modal.
pub const SCHEDULE_OCCASIONS: [&str; 4] = ["work", "casual", "date", "event"];

/// Modification keys offered by the remix modal.
pub const MODIFICATION_OPTIONS: [&str; 6] = [
    "colors",
    "style",
    "formality",
    "season",
    "accessories",
    "budget",
];

/// Simulated current weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weather {
    pub temp: &'static str,
    pub condition: &'static str,
    pub icon: &'static str,
}

pub const WEATHER_OPTIONS: [Weather; 4] = [
    Weather {
        temp: "72°F",
        condition: "Sunny",
        icon: "☀️",
    },
    Weather {
        temp: "68°F",
        condition: "Cloudy",
        icon: "☁️",
    },
    Weather {
        temp: "75°F",
        condition: "Partly Cloudy",
        icon: "⛅",
    },
    Weather {
        temp: "70°F",
        condition: "Light Rain",
        icon: "🌧️",
    },
];
