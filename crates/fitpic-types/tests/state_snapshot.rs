use fitpic_types::*;

const SNAPSHOT: &str = r#"{
    "navigation": {"currentPage": "home-page", "currentStep": 7, "currentOutfitId": 3},
    "userProfile": {
        "name": "Ada",
        "brands": ["COS", "Everlane"],
        "preferences": {"theme": "dark"}
    },
    "commerce": {
        "shoppingCart": [{
            "id": 1712345678901,
            "outfitId": 1,
            "productName": "Flowy Blouse",
            "productBrand": "Free People",
            "price": 88,
            "quantity": 2,
            "addedAt": "2024-04-05T18:14:38.901Z"
        }],
        "wishlist": [1, 3]
    },
    "interactions": {"userRatings": {"3": 5}},
    "collections": {
        "userCollections": [
            {"id": "favorites", "name": "Favorites", "icon": "❤️", "outfits": [3]}
        ]
    }
}"#;

#[test]
fn test_browser_snapshot_deserializes() {
    let state: AppState = serde_json::from_str(SNAPSHOT).unwrap();

    assert_eq!(state.navigation.current_page, PageId::Home);
    assert_eq!(state.navigation.current_step, 7);
    assert_eq!(state.user_profile.name, "Ada");
    assert_eq!(state.user_profile.preferences.theme, Theme::Dark);
    // Unspecified preference fields keep their defaults
    assert!(state.user_profile.preferences.notifications);
    assert_eq!(state.user_profile.preferences.currency, "USD");

    let item = &state.commerce.shopping_cart[0];
    assert_eq!(item.id, "1712345678901");
    assert_eq!(item.line_total(), 176.0);
    assert_eq!(state.cart_item_count(), 2);

    assert!(state.is_wishlisted(3));
    assert!(!state.is_wishlisted(2));
    assert_eq!(state.interactions.user_ratings.get(&3), Some(&5));
    assert!(state.collections.user_collections[0].contains(3));
}

#[test]
fn test_remix_keeps_products_and_records_origin() {
    let original = Outfit {
        id: 2,
        image: "fitpic_2.webp".to_string(),
        tags: vec![],
        tag_labels: vec![],
        filter_categories: vec!["cold-days".to_string()],
        filter_location: vec![],
        filter_style: vec!["casual".to_string()],
        filter_event: vec![],
        filter_season: vec![],
        title: "Casual Cool".to_string(),
        description: "Effortless everyday style".to_string(),
        confidence: 89,
        chips: vec![],
        products: vec![Product::new("Cashmere Sweater", "Everlane", 100.0)],
        weather_suitability: None,
        rating: 4.0,
        reviews: 10,
        saved_by: 3,
        date_added: None,
        occasion_tags: vec![],
        style_notes: vec![],
        social_metrics: SocialMetrics::default(),
        modifications: vec![],
        original_id: None,
        is_remix: false,
    };

    let remix = Outfit::remix_of(
        &original,
        42,
        vec!["color".to_string(), "layers".to_string()],
        91,
    );

    assert_eq!(remix.id, 42);
    assert_eq!(remix.title, "Casual Cool (Remix)");
    assert_eq!(
        remix.description,
        "Modified version with color, layers changes"
    );
    assert_eq!(remix.original_id, Some(2));
    assert!(remix.is_remix);
    assert_eq!(remix.products, original.products);
    assert_eq!(remix.tags_for(FilterCategory::Style), ["casual".to_string()]);

    let json = serde_json::to_value(&remix).unwrap();
    assert_eq!(json["isRemix"], true);
    assert_eq!(json["originalId"], 2);

    let original_json = serde_json::to_value(&original).unwrap();
    assert!(original_json.get("isRemix").is_none());
}
