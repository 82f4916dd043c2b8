use chrono::{DateTime, NaiveDate, Utc};

use fitpic_types::{AppState, ScheduledOutfit};

use crate::{Error, Result};

pub fn select_day(state: &mut AppState, day: &str) {
    state.ui.selected_schedule_day = Some(day.to_string());
}

pub fn select_occasion(state: &mut AppState, occasion: &str) {
    state.ui.selected_occasion = Some(occasion.to_string());
}

pub fn can_confirm(state: &AppState) -> bool {
    state.ui.selected_schedule_day.is_some() && state.ui.selected_occasion.is_some()
}

/// Schedule the current outfit for the selected day and occasion, then
/// clear the selection.
pub fn confirm(state: &mut AppState, now: DateTime<Utc>) -> Result<ScheduledOutfit> {
    let (Some(date), Some(occasion)) = (
        state.ui.selected_schedule_day.clone(),
        state.ui.selected_occasion.clone(),
    ) else {
        return Err(Error::rejected("Please select a day and occasion"));
    };

    let scheduled = ScheduledOutfit {
        outfit_id: state.navigation.current_outfit_id,
        date,
        occasion,
        scheduled_at: now,
    };
    state.collections.scheduled_outfits.push(scheduled.clone());
    cancel(state);
    Ok(scheduled)
}

/// Drop the modal selection without scheduling.
pub fn cancel(state: &mut AppState) {
    state.ui.selected_schedule_day = None;
    state.ui.selected_occasion = None;
}

/// "Outfit scheduled for Monday, Jan 15 (work)". Dates that are not
/// `YYYY-MM-DD` are shown as given.
pub fn message(scheduled: &ScheduledOutfit) -> String {
    let day = NaiveDate::parse_from_str(&scheduled.date, "%Y-%m-%d")
        .map(|d| d.format("%A, %b %-d").to_string())
        .unwrap_or_else(|_| scheduled.date.clone());
    format!("Outfit scheduled for {} ({})", day, scheduled.occasion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_day_and_occasion() {
        let mut state = AppState::default();
        select_day(&mut state, "2024-01-15");
        let err = confirm(&mut state, Utc::now()).unwrap_err();
        assert_eq!(err.user_message(), Some("Please select a day and occasion"));
        assert!(state.collections.scheduled_outfits.is_empty());
        assert!(!can_confirm(&state));
    }

    #[test]
    fn test_confirm_records_current_outfit() {
        let mut state = AppState::default();
        state.navigation.current_outfit_id = 7;
        select_day(&mut state, "2024-01-15");
        select_occasion(&mut state, "work");

        let scheduled = confirm(&mut state, Utc::now()).unwrap();
        assert_eq!(scheduled.outfit_id, 7);
        assert_eq!(state.collections.scheduled_outfits.len(), 1);
        assert!(state.ui.selected_schedule_day.is_none());
        assert_eq!(message(&scheduled), "Outfit scheduled for Monday, Jan 15 (work)");
    }

    #[test]
    fn test_message_falls_back_to_raw_day() {
        let scheduled = ScheduledOutfit {
            outfit_id: 1,
            date: "tomorrow".to_string(),
            occasion: "date".to_string(),
            scheduled_at: Utc::now(),
        };
        assert_eq!(message(&scheduled), "Outfit scheduled for tomorrow (date)");
    }
}
