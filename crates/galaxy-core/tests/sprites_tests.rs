use galaxy_core::{
    Fireworks, HeartField, ShootingStar, ShootingStarField, SpriteShade, BURST_SPARK_COUNT,
    HEART_DESPAWN_MARGIN, HEART_SEED_COUNT, SHOOTING_STAR_FADE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: f32 = 1280.0;
const H: f32 = 720.0;

#[test]
fn seeding_scatters_hearts_over_the_viewport() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut hearts = HeartField::default();
    hearts.seed(W, H, &mut rng);
    assert_eq!(hearts.hearts.len(), HEART_SEED_COUNT);
    for h in &hearts.hearts {
        assert!(h.x >= 0.0 && h.x <= W);
        assert!(h.y >= 0.0 && h.y <= H);
        assert!(h.size >= 5.0 && h.size <= 30.0);
        assert!(h.opacity >= 0.1 && h.opacity <= 0.7);
    }
    // Ids are unique so a pop cannot remove the wrong heart.
    let mut ids: Vec<u32> = hearts.hearts.iter().map(|h| h.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), HEART_SEED_COUNT);
}

#[test]
fn hearts_fall_and_leave_past_the_bottom_margin() {
    let mut rng = StdRng::seed_from_u64(32);
    let mut hearts = HeartField::default();
    hearts.seed(W, H, &mut rng);
    // Park one heart just above the despawn line; it falls at least
    // 0.5 px per tick, so two ticks push it over.
    let id = {
        let h = &mut hearts.hearts[0];
        h.y = H + HEART_DESPAWN_MARGIN - 0.6;
        h.id
    };
    hearts.tick(W, H, 0.0, &mut rng);
    hearts.tick(W, H, 0.01, &mut rng);
    assert!(hearts.hearts.iter().all(|h| h.id != id));
    // Everything still on screen respects the margin.
    assert!(hearts
        .hearts
        .iter()
        .all(|h| h.y <= H + HEART_DESPAWN_MARGIN));
}

#[test]
fn new_hearts_enter_above_the_viewport() {
    let mut rng = StdRng::seed_from_u64(33);
    let mut hearts = HeartField::default();
    for t in 0..50 {
        hearts.tick(W, H, t as f32 * 0.01, &mut rng);
    }
    assert!(!hearts.hearts.is_empty(), "spawn chance 0.4/tick over 50 ticks");
    // Spawned at y = -50 and falling at most 2 px/tick, nothing reaches
    // the lower half of the screen within 50 ticks.
    assert!(hearts.hearts.iter().all(|h| h.y < H / 2.0));
}

#[test]
fn pop_removes_exactly_the_requested_heart() {
    let mut rng = StdRng::seed_from_u64(34);
    let mut hearts = HeartField::default();
    hearts.seed(W, H, &mut rng);
    let target = hearts.hearts[10];
    let (x, y, shade) = hearts.pop(target.id).unwrap();
    assert_eq!(x, target.x);
    assert_eq!(y, target.y);
    assert_eq!(shade, target.shade);
    assert_eq!(hearts.hearts.len(), HEART_SEED_COUNT - 1);
    assert!(hearts.pop(target.id).is_none());
    assert!(hearts.pop(9999).is_none());
}

#[test]
fn shooting_star_fades_linearly_and_is_culled() {
    let mut rng = StdRng::seed_from_u64(35);
    let mut field = ShootingStarField::default();
    // A stationary star planted at the origin; naturally spawned stars
    // travel at 20+ px/tick so none can share its position.
    field.stars.push(ShootingStar {
        x: 0.0,
        y: 0.0,
        length: 150.0,
        speed: 0.0,
        angle: 0.0,
        opacity: 1.0,
    });
    for tick in 1..=49 {
        field.tick(W, H, &mut rng);
        let planted = field
            .stars
            .iter()
            .find(|s| s.x == 0.0 && s.y == 0.0)
            .expect("planted star alive while opacity > 0");
        let expected = 1.0 - tick as f32 * SHOOTING_STAR_FADE;
        assert!((planted.opacity - expected).abs() < 1.0e-4);
    }
    // 50th tick takes opacity to ~0 and the cull removes it.
    field.tick(W, H, &mut rng);
    field.tick(W, H, &mut rng);
    assert!(field.stars.iter().all(|s| s.x != 0.0 || s.y != 0.0));
}

#[test]
fn shooting_stars_travel_down_right_and_exit() {
    let mut rng = StdRng::seed_from_u64(36);
    let mut field = ShootingStarField::default();
    for _ in 0..2000 {
        field.tick(W, H, &mut rng);
        for s in &field.stars {
            assert!(s.opacity > 0.0);
            assert!(s.x <= W && s.y <= H);
            // Diagonal heading: both components positive.
            assert!(s.angle.cos() > 0.0 && s.angle.sin() > 0.0);
        }
    }
}

#[test]
fn burst_sparks_spread_and_gravity_wins() {
    let mut rng = StdRng::seed_from_u64(37);
    let mut fw = Fireworks::default();
    fw.burst(600.0, 400.0, SpriteShade::Primary, &mut rng);
    assert_eq!(fw.sparks.len(), BURST_SPARK_COUNT);
    assert!(fw.sparks.iter().all(|s| s.x == 600.0 && s.y == 400.0));

    for _ in 0..5 {
        fw.tick();
    }
    let spread = fw
        .sparks
        .iter()
        .filter(|s| (s.x - 600.0).abs() > 1.0 || (s.y - 400.0).abs() > 1.0)
        .count();
    assert_eq!(spread, fw.sparks.len(), "every spark leaves the origin");

    // By tick 40 drag has shed enough launch velocity that gravity wins
    // even for the fastest upward spark (0.95^40 * 6 < terminal 1.52).
    for _ in 0..35 {
        fw.tick();
    }
    assert!(!fw.sparks.is_empty());
    assert!(fw.sparks.iter().all(|s| s.vy > 0.0));
}

#[test]
fn sparks_all_expire() {
    let mut rng = StdRng::seed_from_u64(38);
    let mut fw = Fireworks::default();
    fw.burst(0.0, 0.0, SpriteShade::Accent, &mut rng);
    // Slowest decay is 0.01/tick from opacity 1.0.
    for _ in 0..101 {
        fw.tick();
    }
    assert!(fw.sparks.is_empty());
}
