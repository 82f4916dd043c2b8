use rand::Rng;

use fitpic_catalog::Catalog;
use fitpic_types::{AppState, Outfit};

use crate::{Error, Result};

pub const REMIX_CREATED: &str = "Remix generated! Check your feed for the new version.";

/// Flip a modification in the remix selection. Returns whether it is now
/// selected.
pub fn toggle_modification(state: &mut AppState, modification: &str) -> bool {
    let selected = &mut state.ui.selected_modifications;
    if let Some(pos) = selected.iter().position(|m| m == modification) {
        selected.remove(pos);
        false
    } else {
        selected.push(modification.to_string());
        true
    }
}

pub fn clear_modifications(state: &mut AppState) {
    state.ui.selected_modifications.clear();
}

/// Confidence score for a freshly generated remix, 80-99.
pub fn draw_confidence<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(80..100)
}

/// Derive a remix of the current outfit from the selected modifications.
///
/// The remix gets the next free catalog id, is inserted at the front of the
/// catalog, and is appended to the user's remixes. The selection is cleared.
pub fn generate(state: &mut AppState, catalog: &mut Catalog, confidence: u8) -> Result<Outfit> {
    if state.ui.selected_modifications.is_empty() {
        return Err(Error::rejected("Please select at least one modification"));
    }
    let original = catalog.require(state.navigation.current_outfit_id)?;
    let remix = Outfit::remix_of(
        original,
        catalog.next_id(),
        std::mem::take(&mut state.ui.selected_modifications),
        confidence,
    );

    catalog.insert_front(remix.clone());
    state.collections.user_remixes.push(remix.clone());
    Ok(remix)
}
