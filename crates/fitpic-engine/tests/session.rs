use chrono::Utc;
use fitpic_catalog::Catalog;
use fitpic_engine::{ActiveFilters, FeedFilter, cart, collections, pagination, ratings, remix};
use fitpic_types::{AppState, FilterCategory};

/// Page through the whole catalog the way the feed does.
fn load_all(state: &mut AppState, catalog: &Catalog) -> Vec<u64> {
    let mut shown = Vec::new();
    while let Some(range) = pagination::begin_load(&mut state.scroll) {
        shown.extend(catalog.range(range.start, range.end).iter().map(|o| o.id));
        pagination::complete_load(&mut state.scroll, range, catalog.len());
    }
    shown
}

#[test]
fn test_feed_pages_cover_catalog_in_order() {
    let mut state = AppState::default();
    let catalog = Catalog::builtin().unwrap();

    let shown = load_all(&mut state, &catalog);
    assert_eq!(shown, (1..=12).collect::<Vec<_>>());
    assert_eq!(state.scroll.current_outfit_page, 3);
    assert!(!state.scroll.has_more_outfits);
}

#[test]
fn test_remix_appears_first_after_refresh() {
    let mut state = AppState::default();
    let mut catalog = Catalog::builtin().unwrap();
    load_all(&mut state, &catalog);

    state.navigation.current_outfit_id = 2;
    remix::toggle_modification(&mut state, "colors");
    let created = remix::generate(&mut state, &mut catalog, 91).unwrap();

    pagination::reset(&mut state.scroll);
    let shown = load_all(&mut state, &catalog);
    assert_eq!(shown.first(), Some(&created.id));
    assert_eq!(shown.len(), 13);
}

#[test]
fn test_filtered_outfit_to_cart_and_collection() {
    let mut state = AppState::default();
    let mut catalog = Catalog::builtin().unwrap();

    let mut filter = FeedFilter::default();
    filter.apply_multi(
        ActiveFilters::new()
            .with(FilterCategory::Style, "business")
            .with(FilterCategory::Season, "winter"),
    );
    let visible = filter.visible(catalog.as_slice());
    assert_eq!(visible.len(), 1);
    let outfit = visible[0].clone();
    assert_eq!(outfit.title, "Power Professional");

    for product in &outfit.products {
        cart::add(&mut state, product, outfit.id, Utc::now());
    }
    cart::add(&mut state, &outfit.products[0], outfit.id, Utc::now());
    assert_eq!(state.cart_item_count(), 4);
    assert_eq!(cart::total(&state), 295.0 * 2.0 + 188.0 + 118.0);

    collections::seed_defaults(&mut state);
    collections::toggle_outfit(&mut state, "work", outfit.id).unwrap();
    assert!(state.collections.user_collections[1].contains(outfit.id));

    let update = ratings::rate(&mut state, &mut catalog, outfit.id, 5).unwrap();
    assert_eq!(update.reviews, 42);
}
