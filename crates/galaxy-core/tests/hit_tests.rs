use galaxy_core::{HitRegistry, Scene, Theme, PHOTO_SLOTS};

#[test]
fn registry_grows_past_its_inline_capacity() {
    let mut hits = HitRegistry::default();
    // A full billboard set plus a heavy heart population pushes the
    // region buffer well beyond any inline backing.
    for i in 0..PHOTO_SLOTS {
        hits.register_photo(i as f32 * 10.0, 0.0, 4.0, i);
    }
    for i in 0..150u32 {
        hits.register_photo(0.0, 500.0 + i as f32, 4.0, 0);
    }
    assert_eq!(hits.regions.len(), PHOTO_SLOTS + 150);
    // Lookups still resolve across the whole buffer, nearest-drawn first.
    assert_eq!(hits.find_photo(490.0, 0.0), Some(PHOTO_SLOTS - 1));
    assert_eq!(hits.find_photo(0.0, 649.0), Some(0));
    hits.clear();
    assert!(hits.regions.is_empty());
}

#[test]
fn full_scene_registers_all_hearts_and_billboards() {
    let mut scene = Scene::new(1280.0, 720.0, Theme::default(), 5);
    scene.set_photo_count(4);
    scene.tick();
    // Core registers one region per live heart; the painter's billboard
    // registrations stack on top of those.
    assert_eq!(scene.hits.regions.len(), scene.hearts.hearts.len());
    for i in 0..PHOTO_SLOTS {
        scene.hits.register_photo(i as f32, 0.0, 1.0, i % 4);
    }
    assert_eq!(
        scene.hits.regions.len(),
        scene.hearts.hearts.len() + PHOTO_SLOTS
    );
}
