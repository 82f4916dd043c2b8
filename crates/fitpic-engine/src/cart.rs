use chrono::{DateTime, Utc};
use uuid::Uuid;

use fitpic_types::{AppState, CartItem, OutfitId, Product};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    QuantityUpdated,
    Removed,
}

impl CartChange {
    pub fn message(&self) -> &'static str {
        match self {
            CartChange::Added => "Added to cart",
            CartChange::QuantityUpdated => "Quantity updated in cart",
            CartChange::Removed => "Removed from cart",
        }
    }
}

/// Largest quantity a single cart line can hold.
pub const MAX_QUANTITY: u32 = 999;

/// Add one unit of `product`. A line with the same name and brand is
/// incremented instead of duplicated.
pub fn add(
    state: &mut AppState,
    product: &Product,
    outfit_id: OutfitId,
    now: DateTime<Utc>,
) -> CartChange {
    let cart = &mut state.commerce.shopping_cart;
    if let Some(line) = cart.iter_mut().find(|line| line.matches(product)) {
        line.quantity = line.quantity.saturating_add(1).min(MAX_QUANTITY);
        return CartChange::QuantityUpdated;
    }

    cart.push(CartItem {
        id: Uuid::new_v4().to_string(),
        outfit_id,
        product_name: product.name.clone(),
        product_brand: product.brand.clone(),
        price: product.price,
        quantity: 1,
        added_at: now,
    });
    CartChange::Added
}

/// Set a line's quantity; zero or below removes the line and anything above
/// [`MAX_QUANTITY`] is capped.
pub fn set_quantity(state: &mut AppState, item_id: &str, quantity: i64) -> Result<CartChange> {
    if quantity <= 0 {
        return remove(state, item_id);
    }
    let line = state
        .commerce
        .shopping_cart
        .iter_mut()
        .find(|line| line.id == item_id)
        .ok_or_else(|| Error::UnknownCartItem(item_id.to_string()))?;
    line.quantity = u32::try_from(quantity)
        .unwrap_or(MAX_QUANTITY)
        .min(MAX_QUANTITY);
    Ok(CartChange::QuantityUpdated)
}

pub fn remove(state: &mut AppState, item_id: &str) -> Result<CartChange> {
    let cart = &mut state.commerce.shopping_cart;
    let before = cart.len();
    cart.retain(|line| line.id != item_id);
    if cart.len() == before {
        return Err(Error::UnknownCartItem(item_id.to_string()));
    }
    Ok(CartChange::Removed)
}

pub fn clear(state: &mut AppState) {
    state.commerce.shopping_cart.clear();
}

pub fn total(state: &AppState) -> f64 {
    state.commerce.shopping_cart.iter().map(CartItem::line_total).sum()
}

/// Cart badge text; `None` hides the badge.
pub fn badge(state: &AppState) -> Option<String> {
    match state.cart_item_count() {
        0 => None,
        n => Some(n.to_string()),
    }
}

pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn checkout_message(state: &AppState) -> String {
    format!("Redirecting to checkout for {}...", format_price(total(state)))
}

pub const ORDER_PLACED: &str = "Order placed successfully! (Demo)";

#[cfg(test)]
mod tests {
    use super::*;

    fn blouse() -> Product {
        Product::new("Flowy Blouse", "Free People", 88.0)
    }

    #[test]
    fn test_same_product_twice_is_one_line() {
        let mut state = AppState::default();
        let now = Utc::now();
        assert_eq!(add(&mut state, &blouse(), 1, now), CartChange::Added);
        assert_eq!(add(&mut state, &blouse(), 3, now), CartChange::QuantityUpdated);

        let cart = &state.commerce.shopping_cart;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
        assert_eq!(cart[0].outfit_id, 1);
        assert_eq!(badge(&state).as_deref(), Some("2"));
    }

    #[test]
    fn test_same_name_other_brand_is_new_line() {
        let mut state = AppState::default();
        add(&mut state, &blouse(), 1, Utc::now());
        add(&mut state, &Product::new("Flowy Blouse", "COS", 60.0), 1, Utc::now());
        assert_eq!(state.commerce.shopping_cart.len(), 2);
        assert_ne!(state.commerce.shopping_cart[0].id, state.commerce.shopping_cart[1].id);
        assert_eq!(total(&state), 148.0);
    }

    #[test]
    fn test_quantity_zero_removes_line() {
        let mut state = AppState::default();
        add(&mut state, &blouse(), 1, Utc::now());
        let id = state.commerce.shopping_cart[0].id.clone();

        assert_eq!(set_quantity(&mut state, &id, 3).unwrap(), CartChange::QuantityUpdated);
        assert_eq!(total(&state), 264.0);

        assert_eq!(set_quantity(&mut state, &id, 0).unwrap(), CartChange::Removed);
        assert!(state.commerce.shopping_cart.is_empty());
        assert!(badge(&state).is_none());
    }

    #[test]
    fn test_oversized_quantity_is_capped() {
        let mut state = AppState::default();
        add(&mut state, &blouse(), 1, Utc::now());
        let id = state.commerce.shopping_cart[0].id.clone();

        set_quantity(&mut state, &id, 10_000_000_000).unwrap();
        assert_eq!(state.commerce.shopping_cart[0].quantity, MAX_QUANTITY);

        assert_eq!(add(&mut state, &blouse(), 1, Utc::now()), CartChange::QuantityUpdated);
        assert_eq!(state.commerce.shopping_cart[0].quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_add_to_stored_max_line_does_not_wrap() {
        let mut state = AppState::default();
        add(&mut state, &blouse(), 1, Utc::now());
        state.commerce.shopping_cart[0].quantity = u32::MAX;

        add(&mut state, &blouse(), 1, Utc::now());
        assert_eq!(state.commerce.shopping_cart[0].quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_unknown_line() {
        let mut state = AppState::default();
        assert!(matches!(set_quantity(&mut state, "nope", 2), Err(Error::UnknownCartItem(_))));
        assert!(matches!(remove(&mut state, "nope"), Err(Error::UnknownCartItem(_))));
    }

    #[test]
    fn test_checkout_message() {
        let mut state = AppState::default();
        add(&mut state, &blouse(), 1, Utc::now());
        add(&mut state, &Product::new("Block Heels", "Everlane", 168.5), 1, Utc::now());
        assert_eq!(checkout_message(&state), "Redirecting to checkout for $256.50...");
        clear(&mut state);
        assert_eq!(format_price(total(&state)), "$0.00");
    }
}
