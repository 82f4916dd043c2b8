use chrono::{DateTime, Utc, Weekday};
use rand::Rng;
use serde::Serialize;

use fitpic_catalog::{WEATHER_OPTIONS, Weather};
use fitpic_types::{AppState, ProfileDraft, Theme};

use crate::{Error, Result};

/// Onboarding tag groups with their selection limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Brand,
    Event,
    Aesthetic,
}

impl SelectionKind {
    /// Minimum and maximum number of selections.
    pub fn limits(&self) -> (usize, usize) {
        match self {
            SelectionKind::Brand => (1, 5),
            SelectionKind::Event => (1, 3),
            SelectionKind::Aesthetic => (1, 4),
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            SelectionKind::Brand => "brands",
            SelectionKind::Event => "events",
            SelectionKind::Aesthetic => "aesthetics",
        }
    }

    fn values_mut<'a>(&self, state: &'a mut AppState) -> &'a mut Vec<String> {
        match self {
            SelectionKind::Brand => &mut state.user_profile.brands,
            SelectionKind::Event => &mut state.user_profile.events,
            SelectionKind::Aesthetic => &mut state.user_profile.aesthetics,
        }
    }
}

/// Flip an onboarding tag. Selecting past the maximum is rejected.
pub fn toggle_selection(state: &mut AppState, kind: SelectionKind, value: &str) -> Result<bool> {
    let (_, max) = kind.limits();
    let values = kind.values_mut(state);
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
        return Ok(false);
    }
    if values.len() >= max {
        return Err(Error::rejected(format!(
            "You can select up to {} {}",
            max,
            kind.plural()
        )));
    }
    values.push(value.to_string());
    Ok(true)
}

/// Whether enough tags are selected in every group to continue.
pub fn selections_complete(state: &AppState) -> bool {
    let profile = &state.user_profile;
    [
        (SelectionKind::Brand, profile.brands.len()),
        (SelectionKind::Event, profile.events.len()),
        (SelectionKind::Aesthetic, profile.aesthetics.len()),
    ]
    .iter()
    .all(|(kind, n)| *n >= kind.limits().0)
}

/// Save the current onboarding selections for later.
pub fn save_draft(state: &mut AppState, now: DateTime<Utc>) -> ProfileDraft {
    let draft = ProfileDraft {
        brands: state.user_profile.brands.clone(),
        events: state.user_profile.events.clone(),
        aesthetics: state.user_profile.aesthetics.clone(),
        timestamp: Some(now),
    };
    state.interactions.profile_draft = Some(draft.clone());
    draft
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePreview {
    pub brands: Vec<String>,
    pub events: Vec<String>,
    pub aesthetics: Vec<String>,
}

const PREVIEW_LEN: usize = 3;

/// Summary shown at the last onboarding step: the first three of each group.
pub fn preview(state: &AppState) -> ProfilePreview {
    let first = |values: &[String]| values.iter().take(PREVIEW_LEN).cloned().collect();
    ProfilePreview {
        brands: first(&state.user_profile.brands),
        events: first(&state.user_profile.events),
        aesthetics: first(&state.user_profile.aesthetics),
    }
}

pub fn style_score(state: &AppState) -> f64 {
    let saved = state.collections.saved_outfits.len() as f64;
    let collections = state.collections.user_collections.len() as f64;
    (7.5 + saved * 0.02 + collections * 0.05).min(10.0)
}

pub fn toggle_theme(state: &mut AppState) -> Theme {
    let theme = &mut state.user_profile.preferences.theme;
    *theme = theme.toggled();
    *theme
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn contextual_recommendation(hour: u32, weekday: Weekday) -> &'static str {
    let weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);
    match hour {
        7..=9 if !weekend => "Perfect for your morning commute",
        12..=14 => "Great for lunch meetings",
        17..=19 => "Ideal for after-work plans",
        _ if weekend => "Perfect for weekend relaxation",
        _ => "Matches your personal style",
    }
}

pub fn simulated_weather<R: Rng + ?Sized>(rng: &mut R) -> Weather {
    WEATHER_OPTIONS[rng.gen_range(0..WEATHER_OPTIONS.len())]
}
