use galaxy_core::{
    CameraController, PointerKind, AUTO_ROTATE_IDLE, INITIAL_ZOOM, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::FRAC_PI_2;

#[test]
fn pitch_stays_inside_open_interval_for_any_drag_sequence() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut cam = CameraController::default();
    cam.pointer_down(0.0, 0.0);
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    for _ in 0..5000 {
        x += rng.gen_range(-500.0..500.0);
        y += rng.gen_range(-500.0..500.0);
        cam.pointer_move(x, y, PointerKind::Mouse);
        cam.step();
        assert!(cam.target_pitch.abs() <= PITCH_LIMIT);
        assert!(cam.pitch > -FRAC_PI_2 && cam.pitch < FRAC_PI_2);
    }
}

#[test]
fn pitch_clamp_applies_to_touch_drags_too() {
    let mut cam = CameraController::default();
    cam.pointer_down(0.0, 0.0);
    // One enormous vertical swipe.
    cam.pointer_move(0.0, 1.0e6, PointerKind::Touch);
    assert_eq!(cam.target_pitch, PITCH_LIMIT);
    cam.pointer_move(0.0, -2.0e6, PointerKind::Touch);
    assert_eq!(cam.target_pitch, -PITCH_LIMIT);
}

#[test]
fn zoom_clamped_for_any_wheel_or_pinch_input() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut cam = CameraController::default();
    for _ in 0..2000 {
        if rng.gen_bool(0.5) {
            cam.wheel(rng.gen_range(-1.0e5..1.0e5));
        } else {
            cam.begin_pinch(rng.gen_range(0.0..500.0));
            cam.pinch_move(rng.gen_range(0.0..500.0));
        }
        cam.step();
        assert!(cam.target_zoom >= ZOOM_MIN && cam.target_zoom <= ZOOM_MAX);
        assert!(cam.zoom >= ZOOM_MIN && cam.zoom <= ZOOM_MAX);
    }
}

#[test]
fn zoom_eases_toward_target_without_overshoot() {
    let mut cam = CameraController::default();
    cam.wheel(1.0e9); // target pinned at the far clamp
    assert_eq!(cam.target_zoom, ZOOM_MAX);
    let mut prev = cam.zoom;
    for _ in 0..200 {
        cam.step();
        assert!(cam.zoom >= prev);
        assert!(cam.zoom <= ZOOM_MAX);
        prev = cam.zoom;
    }
    // 10% of remaining distance per tick converges well inside 200 ticks.
    assert!((cam.zoom - ZOOM_MAX).abs() < 1.0);
}

#[test]
fn drag_suspends_auto_rotation_and_release_resumes_slower() {
    let mut cam = CameraController::default();
    let initial = cam.auto_rotate;
    assert!(initial > 0.0);

    cam.pointer_down(10.0, 10.0);
    assert!(cam.is_dragging());
    assert_eq!(cam.auto_rotate, 0.0);
    let yaw_target = cam.target_yaw;
    cam.step();
    assert_eq!(cam.target_yaw, yaw_target); // no idle spin while dragging

    cam.pointer_up();
    assert!(!cam.is_dragging());
    assert_eq!(cam.auto_rotate, AUTO_ROTATE_IDLE);
    assert!(cam.auto_rotate < initial);
    cam.step();
    assert!(cam.target_yaw > yaw_target);
}

#[test]
fn second_touch_cancels_drag() {
    let mut cam = CameraController::default();
    cam.pointer_down(0.0, 0.0);
    cam.begin_pinch(120.0);
    assert!(!cam.is_dragging());
    // Moves no longer rotate.
    let pitch = cam.target_pitch;
    cam.pointer_move(50.0, 50.0, PointerKind::Touch);
    assert_eq!(cam.target_pitch, pitch);
    // Closing the fingers pulls the camera back.
    let zoom = cam.target_zoom;
    cam.pinch_move(80.0);
    assert!(cam.target_zoom > zoom);
}

#[test]
fn initial_zoom_matches_session_default() {
    let cam = CameraController::default();
    assert_eq!(cam.zoom, INITIAL_ZOOM);
    assert_eq!(cam.target_zoom, INITIAL_ZOOM);
}
