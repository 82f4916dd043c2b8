use fitpic_runtime::{AppBuilder, FixedOutcome, UiEvent};
use fitpic_store::{BACKUP_KEY, KeyValueStorage, MemoryStorage, STATE_KEY};
use fitpic_types::{PageId, Theme, fields};

#[tokio::test]
async fn test_user_content_survives_restart() {
    let storage = MemoryStorage::new();
    {
        let (app, _events) = AppBuilder::new(storage.clone())
            .outcome(FixedOutcome::Succeed)
            .start()
            .unwrap();
        app.toggle_wishlist(5);
        app.rate_outfit(2, 5);
        app.toggle_theme();
        app.navigate_to_outfit_detail(2);
        app.toggle_modification("colors");
        app.generate_remix();
        app.shutdown();
    }
    assert!(storage.get(STATE_KEY).unwrap().is_some());

    let (app, mut events) = AppBuilder::new(storage).start().unwrap();
    assert_eq!(app.get(fields::WISHLIST), vec![5]);
    assert_eq!(app.current_page(), PageId::Entry);

    let rated = app.outfit(2).unwrap();
    assert_eq!(rated.reviews, 32);
    assert!((rated.rating - 4.225).abs() < 1e-9);

    let catalog = app.catalog();
    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog[0].id, 13);
    assert!(catalog[0].is_remix);

    let startup = events.drain();
    assert_eq!(startup[0], UiEvent::ThemeChanged { theme: Theme::Dark });
    assert!(startup.contains(&UiEvent::CartBadge { count: 0 }));
}

#[tokio::test]
async fn test_legacy_keys_migrate_on_start() {
    let storage = MemoryStorage::with_entries([
        ("fitpic-theme", "dark"),
        ("fitpic-wishlist", "[2, 9]"),
    ]);

    let (app, _events) = AppBuilder::new(storage.clone()).start().unwrap();

    assert_eq!(app.get(fields::THEME), Theme::Dark);
    assert_eq!(app.get(fields::WISHLIST), vec![2, 9]);
    assert_eq!(storage.get("fitpic-wishlist").unwrap(), None);
}

#[tokio::test]
async fn test_mistyped_snapshot_field_keeps_user_data() {
    let storage = MemoryStorage::with_entries([(
        STATE_KEY,
        r#"{"commerce": {"wishlist": [2, 5]},
            "userProfile": {"name": "Ana", "age": "30"},
            "ui": {"selectedModifications": "oops"}}"#,
    )]);

    let (app, _events) = AppBuilder::new(storage.clone()).start().unwrap();
    assert_eq!(app.get(fields::WISHLIST), vec![2, 5]);
    assert_eq!(app.get(fields::USER_PROFILE).name, "Ana");
    app.shutdown();

    let (app, _events) = AppBuilder::new(storage.clone()).start().unwrap();
    assert_eq!(app.get(fields::WISHLIST), vec![2, 5]);
    assert!(storage.get(BACKUP_KEY).unwrap().is_some());
}
