use galaxy_core::{
    particle_alpha, project_field, twinkle, CameraController, DrawItem, ParticleField, PointKind,
    ProjectedPoint, FOCAL_LENGTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn depths(items: &[DrawItem]) -> Vec<f32> {
    items
        .iter()
        .filter_map(|i| match i {
            DrawItem::Particle(p) => Some(p.depth),
            DrawItem::Planet { .. } => None,
        })
        .collect()
}

#[test]
fn draw_order_is_back_to_front() {
    let mut rng = StdRng::seed_from_u64(21);
    let field = ParticleField::build(4, &mut rng);
    let camera = CameraController::default();
    let mut items = Vec::new();
    project_field(&field, &camera, 1920.0, 1080.0, &mut items);

    assert_eq!(items.len(), field.points.len() + 1); // field + planet
    let d = depths(&items);
    for pair in d.windows(2) {
        assert!(pair[0] >= pair[1], "nearer point drawn before farther one");
    }
}

#[test]
fn planet_occupies_its_own_depth_slot() {
    let mut rng = StdRng::seed_from_u64(22);
    let field = ParticleField::build(0, &mut rng);
    let camera = CameraController::default();
    let mut items = Vec::new();
    project_field(&field, &camera, 800.0, 600.0, &mut items);

    let planet_depth = camera.zoom;
    let slot = items
        .iter()
        .position(|i| matches!(i, DrawItem::Planet { .. }))
        .expect("planet missing from draw list");
    assert_eq!(
        items
            .iter()
            .filter(|i| matches!(i, DrawItem::Planet { .. }))
            .count(),
        1
    );
    for (i, item) in items.iter().enumerate() {
        if let DrawItem::Particle(p) = item {
            if i < slot {
                assert!(p.depth >= planet_depth);
            } else {
                assert!(p.depth < planet_depth);
            }
        }
    }
    if let DrawItem::Planet { x, y, scale } = items[slot] {
        assert_eq!(x, 400.0);
        assert_eq!(y, 300.0);
        let expected = FOCAL_LENGTH / (FOCAL_LENGTH + planet_depth);
        assert!((scale - expected).abs() < 1.0e-6);
    }
}

#[test]
fn behind_camera_points_sort_but_carry_non_positive_scale() {
    let mut rng = StdRng::seed_from_u64(23);
    let field = ParticleField::build(0, &mut rng);
    let mut camera = CameraController::default();
    // Pull the camera deep into the field so part of it sits behind us.
    camera.zoom = -1200.0;
    camera.target_zoom = -1200.0;
    let mut items = Vec::new();
    project_field(&field, &camera, 800.0, 600.0, &mut items);

    let behind = depths(&items).iter().filter(|d| **d < -FOCAL_LENGTH).count();
    assert!(behind > 0, "expected some points behind the camera");
    // Sort order still holds over the whole list.
    let d = depths(&items);
    for pair in d.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    for item in &items {
        if let DrawItem::Particle(p) = item {
            if p.depth < -FOCAL_LENGTH {
                assert!(p.scale <= 0.0);
            }
        }
    }
}

#[test]
fn projection_scale_matches_perspective_formula() {
    let mut rng = StdRng::seed_from_u64(24);
    let field = ParticleField::build(0, &mut rng);
    let camera = CameraController::default();
    let mut items = Vec::new();
    project_field(&field, &camera, 1000.0, 1000.0, &mut items);
    for item in &items {
        if let DrawItem::Particle(p) = item {
            let expected = FOCAL_LENGTH / (FOCAL_LENGTH + p.depth);
            assert!((p.scale - expected).abs() < 1.0e-4);
        }
    }
}

fn projected(scale: f32, depth: f32) -> ProjectedPoint {
    ProjectedPoint {
        index: 0,
        x: 0.0,
        y: 0.0,
        scale,
        depth,
    }
}

#[test]
fn distant_points_fade_in_with_scale() {
    let dust = PointKind::Dust {
        shade: galaxy_core::DustShade::Primary,
    };
    let far = particle_alpha(&projected(0.2, 3200.0), &dust, 0.0);
    assert!((far - 0.4).abs() < 1.0e-6);
    let near = particle_alpha(&projected(0.9, 100.0), &dust, 0.0);
    assert_eq!(near, 1.0);
}

#[test]
fn near_plane_fade_avoids_a_hard_pop() {
    let dust = PointKind::Dust {
        shade: galaxy_core::DustShade::Primary,
    };
    let a = particle_alpha(&projected(1.1, 25.0), &dust, 0.0);
    assert!((a - 0.5).abs() < 1.0e-6); // 25/50 of full opacity
    let at_plane = particle_alpha(&projected(1.2, 0.0), &dust, 0.0);
    assert_eq!(at_plane, 0.0);
}

#[test]
fn close_photos_snap_to_full_opacity() {
    let photo = PointKind::Photo {
        photo_index: 0,
        spin_offset: 0.0,
    };
    // Close enough that the near fade would otherwise dim it.
    let a = particle_alpha(&projected(1.5, 30.0), &photo, 0.0);
    assert_eq!(a, 1.0);
}

#[test]
fn star_twinkle_stays_within_its_band() {
    let star = PointKind::Star {
        twinkle_speed: 2.0,
        twinkle_phase: 1.0,
    };
    for i in 0..1000 {
        let t = i as f32 * 0.01;
        let f = twinkle(t, 2.0, 1.0);
        assert!((0.3..=1.0).contains(&f));
        let a = particle_alpha(&projected(0.6, 500.0), &star, t);
        assert!(a <= 1.0 && a >= 0.0);
    }
}
