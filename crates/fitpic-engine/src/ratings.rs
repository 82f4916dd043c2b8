use fitpic_catalog::Catalog;
use fitpic_types::{AppState, OutfitId};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingUpdate {
    pub outfit_id: OutfitId,
    pub rating: f64,
    pub reviews: u32,
}

/// Record the user's 1-5 rating of an outfit and recompute its average.
///
/// The first rating of an outfit by this user adds a review; re-rating
/// replaces it. The average folds every stored user rating in with the
/// outfit's prior average weighted by the remaining reviews.
pub fn rate(
    state: &mut AppState,
    catalog: &mut Catalog,
    outfit_id: OutfitId,
    rating: u8,
) -> Result<RatingUpdate> {
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating(rating));
    }
    let outfit = catalog.require_mut(outfit_id)?;

    let ratings = &mut state.interactions.user_ratings;
    let first = ratings.insert(outfit_id, rating).is_none();
    if first {
        outfit.reviews += 1;
    }

    let count = ratings.len() as f64;
    let sum: f64 = ratings.values().map(|r| f64::from(*r)).sum();
    let reviews = f64::from(outfit.reviews.max(1));
    outfit.rating = (sum + outfit.rating * (reviews - count)) / reviews;

    tracing::debug!(outfit_id, rating, average = outfit.rating, "Outfit rated");
    Ok(RatingUpdate {
        outfit_id,
        rating: outfit.rating,
        reviews: outfit.reviews,
    })
}

pub fn message(rating: u8) -> String {
    if rating > 1 {
        format!("Rated {} stars!", rating)
    } else {
        "Rated 1 star!".to_string()
    }
}

/// Re-apply persisted user ratings to a freshly loaded catalog.
pub fn restore(state: &AppState, catalog: &mut Catalog) {
    let mut scratch = state.clone();
    scratch.interactions.user_ratings.clear();
    for (id, rating) in &state.interactions.user_ratings {
        if let Err(err) = rate(&mut scratch, catalog, *id, *rating) {
            tracing::warn!("Skipping stored rating for outfit {}: {}", id, err);
        }
    }
}
