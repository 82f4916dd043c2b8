use fitpic_types::{AppState, OutfitId};

/// Flip wishlist membership. Returns whether the outfit is now wishlisted.
pub fn toggle(state: &mut AppState, outfit_id: OutfitId) -> bool {
    let wishlist = &mut state.commerce.wishlist;
    if let Some(pos) = wishlist.iter().position(|id| *id == outfit_id) {
        wishlist.remove(pos);
        false
    } else {
        wishlist.push(outfit_id);
        true
    }
}

pub fn message(wishlisted: bool) -> &'static str {
    if wishlisted {
        "Added to wishlist"
    } else {
        "Removed from wishlist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut state = AppState::default();
        state.commerce.wishlist = vec![2];

        assert!(toggle(&mut state, 5));
        assert_eq!(state.commerce.wishlist, vec![2, 5]);
        assert!(!toggle(&mut state, 5));
        assert_eq!(state.commerce.wishlist, vec![2]);

        assert!(!toggle(&mut state, 2));
        assert!(toggle(&mut state, 2));
        assert!(state.is_wishlisted(2));
    }
}
