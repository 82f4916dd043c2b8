use fitpic_testing::TestWorld;
use fitpic_testing::assertions::{assert_event, assert_toast, toasts};

#[test]
fn test_add_single_product() {
    let world = TestWorld::instant().json();
    let json = world
        .run(&["cart", "add", "1", "--product", "2"])
        .unwrap()
        .json()
        .unwrap();

    let items = json["content"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["productName"], "High-Waist Jeans");
    assert_eq!(json["content"]["count"], 1);
    assert_eq!(json["content"]["total"], 128.0);
}

#[test]
fn test_adding_same_product_increments_quantity() {
    let world = TestWorld::instant().json();
    world.run(&["cart", "add", "5", "--product", "1"]).unwrap();
    let json = world
        .run(&["cart", "add", "5", "--product", "1"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["content"]["items"][0]["quantity"], 2);
    assert_eq!(json["content"]["count"], 2);
}

#[test]
fn test_add_whole_outfit_waits_for_delay() {
    let world = TestWorld::instant().json();
    let json = world.run(&["cart", "add", "7"]).unwrap().json().unwrap();

    assert_eq!(json["content"]["count"], 3);
    assert_event(&json, "add_to_cart_pending").unwrap();
    assert_event(&json, "add_to_cart_done").unwrap();
}

#[test]
fn test_product_position_out_of_range() {
    let world = TestWorld::instant();
    let result = world.run(&["cart", "add", "1", "--product", "4"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Outfit 1 has no product 4 (it has 3)"));
}

#[test]
fn test_quantity_zero_removes_item() {
    let world = TestWorld::instant().json();
    let added = world
        .run(&["cart", "add", "2", "--product", "3"])
        .unwrap()
        .json()
        .unwrap();
    let item_id = added["content"]["items"][0]["id"].as_str().unwrap().to_string();

    let json = world
        .run(&["cart", "quantity", &item_id, "0"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["count"], 0);
}

#[test]
fn test_unknown_cart_item_fails() {
    let world = TestWorld::instant();
    let result = world.run(&["cart", "remove", "nope"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Cart item 'nope' not found"));
}

#[test]
fn test_checkout_empties_cart() {
    let world = TestWorld::instant().json();
    world.run(&["cart", "add", "7", "--product", "1"]).unwrap();

    let json = world.run(&["cart", "checkout"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["count"], 0);
    assert_eq!(
        toasts(&json).unwrap(),
        vec![
            "Redirecting to checkout for $295.00...".to_string(),
            "Order placed successfully! (Demo)".to_string(),
        ]
    );
}

#[test]
fn test_checkout_requires_items() {
    let world = TestWorld::instant();
    let result = world.run(&["cart", "checkout"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Cart is empty"));
}

#[test]
fn test_empty_cart_plain() {
    let world = TestWorld::instant();
    let result = world.run(&["cart", "list"]).unwrap();

    assert!(result.success());
    insta::assert_snapshot!(result.stdout(), @"Your cart is empty");
}

#[test]
fn test_wishlist_toggle_round_trip() {
    let world = TestWorld::instant();
    let liked = world.run(&["wishlist", "toggle", "5"]).unwrap();
    assert!(liked.success());
    assert!(liked.stdout().contains("Added to wishlist"));

    let listed = world.run(&["wishlist", "list"]).unwrap();
    assert!(listed.stdout().contains("Summer Vibes"));

    let unliked = world.run(&["wishlist", "toggle", "5"]).unwrap();
    assert!(unliked.stdout().contains("Removed from wishlist"));

    let state = world.saved_state().unwrap().unwrap();
    assert_eq!(state["commerce"]["wishlist"], serde_json::json!([]));
}

#[test]
fn test_collections_seed_create_and_reject_duplicate() {
    let world = TestWorld::instant().json();
    let seeded = world.run(&["collections", "list"]).unwrap().json().unwrap();
    let defaults = seeded["content"].as_array().unwrap().len();
    assert!(defaults > 0);

    let created = world
        .run(&["collections", "create", "Trips", "--outfit", "3"])
        .unwrap()
        .json()
        .unwrap();
    let collections = created["content"].as_array().unwrap();
    assert_eq!(collections.len(), defaults + 1);
    let trips = collections.iter().find(|c| c["name"] == "Trips").unwrap();
    assert_eq!(trips["outfits"], serde_json::json!([3]));
    assert_toast(&created, "Created \"Trips\" collection").unwrap();

    let again = world
        .run(&["collections", "create", "trips", "--outfit", "4"])
        .unwrap();
    assert!(!again.success());
    assert!(again.stderr().contains("Collection name already exists"));
}

#[test]
fn test_rating_adds_one_review() {
    let world = TestWorld::instant().json();
    let before = world.run(&["outfit", "2"]).unwrap().json().unwrap();
    let reviews = before["content"]["reviews"].as_u64().unwrap();

    let rated = world.run(&["rate", "2", "5"]).unwrap().json().unwrap();
    assert_eq!(rated["content"]["reviews"].as_u64().unwrap(), reviews + 1);
    assert_toast(&rated, "Rated 5 stars!").unwrap();

    // Re-rating replaces the earlier rating
    let rerated = world.run(&["rate", "2", "3"]).unwrap().json().unwrap();
    assert_eq!(rerated["content"]["reviews"].as_u64().unwrap(), reviews + 1);

    let after = world.run(&["outfit", "2"]).unwrap().json().unwrap();
    assert_eq!(after["content"]["userRating"], 3);
}

#[test]
fn test_rating_out_of_range() {
    let world = TestWorld::instant();
    let result = world.run(&["rate", "2", "6"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Rating must be between 1 and 5, got 6"));
}

#[test]
fn test_schedule_outfit() {
    let world = TestWorld::instant().json();
    let json = world
        .run(&["schedule", "4", "--day", "2024-01-15", "--occasion", "work"])
        .unwrap()
        .json()
        .unwrap();

    let scheduled = json["content"]["scheduled"].as_array().unwrap();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0]["outfitId"], 4);
    assert_toast(&json, "Outfit scheduled for Monday, Jan 15 (work)").unwrap();
}

#[test]
fn test_remix_goes_to_front_of_feed() {
    let world = TestWorld::instant().json();
    let json = world
        .run(&["remix", "3", "--modify", "colors", "--modify", "season"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["id"], 13);
    assert_eq!(json["content"]["originalId"], 3);
    assert_eq!(json["content"]["isRemix"], true);
    assert_toast(&json, "Remix generated! Check your feed for the new version.").unwrap();

    let feed = world.run(&["outfits"]).unwrap().json().unwrap();
    assert_eq!(feed["content"]["outfits"][0]["id"], 13);
    assert_eq!(feed["content"]["total_pages"], 2);
}

#[test]
fn test_remix_rejects_unknown_modification() {
    let world = TestWorld::instant();
    let result = world.run(&["remix", "3", "--modify", "sparkles"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown modification 'sparkles'"));
}
