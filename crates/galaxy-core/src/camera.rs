//! Orbit camera driven by drag, wheel and pinch gestures.
//!
//! Targets move immediately on input; the current pose eases toward them by
//! a fixed fraction per tick (exponential smoothing, no spring physics).
//! The eased pose is the single source of camera truth for projection.

use crate::constants::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    fn sensitivity(self) -> f32 {
        match self {
            PointerKind::Mouse => MOUSE_SENSITIVITY,
            PointerKind::Touch => TOUCH_SENSITIVITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraController {
    pub zoom: f32,
    pub target_zoom: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub target_pitch: f32,
    pub target_yaw: f32,
    /// Idle spin applied to the yaw target each tick; zero while dragging.
    pub auto_rotate: f32,
    dragging: bool,
    last_x: f32,
    last_y: f32,
    last_pinch_dist: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            zoom: INITIAL_ZOOM,
            target_zoom: INITIAL_ZOOM,
            pitch: INITIAL_PITCH,
            yaw: 0.0,
            target_pitch: INITIAL_PITCH,
            target_yaw: 0.0,
            auto_rotate: AUTO_ROTATE_INITIAL,
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
            last_pinch_dist: 0.0,
        }
    }
}

impl CameraController {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Enter drag mode. Auto-rotation stops until the pointer is released.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
        self.auto_rotate = 0.0;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, kind: PointerKind) {
        if !self.dragging {
            return;
        }
        let sens = kind.sensitivity();
        self.target_yaw += (x - self.last_x) * sens;
        self.target_pitch += (y - self.last_y) * sens;
        // Clamp pitch short of +-90 degrees so the view never flips.
        self.target_pitch = self.target_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.last_x = x;
        self.last_y = y;
    }

    /// Leave drag mode and resume a slower idle drift.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.auto_rotate = AUTO_ROTATE_IDLE;
    }

    pub fn wheel(&mut self, delta: f32) {
        self.target_zoom =
            (self.target_zoom + delta * WHEEL_ZOOM_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// A second touch cancels any in-progress drag and starts tracking the
    /// inter-finger distance.
    pub fn begin_pinch(&mut self, dist: f32) {
        self.dragging = false;
        self.last_pinch_dist = dist;
    }

    pub fn pinch_move(&mut self, dist: f32) {
        let delta = self.last_pinch_dist - dist;
        self.target_zoom =
            (self.target_zoom + delta * PINCH_ZOOM_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
        self.last_pinch_dist = dist;
    }

    /// Advance one tick: idle spin, then ease current toward targets.
    pub fn step(&mut self) {
        self.target_yaw += self.auto_rotate;
        self.zoom += (self.target_zoom - self.zoom) * EASE_FACTOR;
        self.pitch += (self.target_pitch - self.pitch) * EASE_FACTOR;
        self.yaw += (self.target_yaw - self.yaw) * EASE_FACTOR;
    }
}
