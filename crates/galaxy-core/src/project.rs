//! Per-frame projection and painter's-algorithm ordering.
//!
//! Every point is rotated by the eased camera pose (yaw about Y, then pitch
//! about X), pushed back by the zoom distance and perspective-projected.
//! The sorted output is a transient draw list rebuilt into a reusable
//! scratch buffer each tick; nothing here survives a frame.

use crate::camera::CameraController;
use crate::constants::*;
use crate::field::{ParticleField, PointKind};

/// Screen-space projection of one field point. `depth` is the signed
/// distance in front of the camera; non-positive `scale` means the point is
/// behind the camera and must not be drawn (it still sorts).
#[derive(Clone, Copy, Debug)]
pub struct ProjectedPoint {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub depth: f32,
}

/// One entry of the back-to-front draw sequence. The planet is not a field
/// point; it is spliced into the order at its own depth so ring particles
/// occlude it correctly from behind.
#[derive(Clone, Copy, Debug)]
pub enum DrawItem {
    Particle(ProjectedPoint),
    Planet { x: f32, y: f32, scale: f32 },
}

/// Project the whole field and rebuild `out` sorted far-to-near, with the
/// planet inserted at its depth slot.
pub fn project_field(
    field: &ParticleField,
    camera: &CameraController,
    width: f32,
    height: f32,
    out: &mut Vec<DrawItem>,
) {
    out.clear();
    out.reserve(field.points.len() + 1);

    let (sin_y, cos_y) = camera.yaw.sin_cos();
    let (sin_x, cos_x) = camera.pitch.sin_cos();
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    for (index, p) in field.points.iter().enumerate() {
        // Yaw about the vertical axis.
        let x1 = p.pos.x * cos_y - p.pos.z * sin_y;
        let z1 = p.pos.x * sin_y + p.pos.z * cos_y;
        // Pitch about the horizontal axis.
        let y2 = p.pos.y * cos_x - z1 * sin_x;
        let z2 = p.pos.y * sin_x + z1 * cos_x;

        let depth = z2 + camera.zoom;
        let scale = FOCAL_LENGTH / (FOCAL_LENGTH + depth);
        out.push(DrawItem::Particle(ProjectedPoint {
            index,
            x: center_x + x1 * scale,
            y: center_y + y2 * scale,
            scale,
            depth,
        }));
    }

    // Farthest first. Stable sort keeps build order for equal depths.
    out.sort_by(|a, b| item_depth(b).total_cmp(&item_depth(a)));

    let planet_depth = camera.zoom;
    let planet_scale = FOCAL_LENGTH / (FOCAL_LENGTH + planet_depth);
    let slot = out.partition_point(|item| item_depth(item) >= planet_depth);
    out.insert(
        slot,
        DrawItem::Planet {
            x: center_x,
            y: center_y,
            scale: planet_scale,
        },
    );
}

fn item_depth(item: &DrawItem) -> f32 {
    match item {
        DrawItem::Particle(p) => p.depth,
        // Only present after insertion; never participates in the sort.
        DrawItem::Planet { .. } => 0.0,
    }
}

/// Opacity for a projected particle: distant points fade in with scale,
/// points approaching the near plane fade out linearly, photo billboards in
/// close range snap to full opacity, and stars twinkle on top.
pub fn particle_alpha(p: &ProjectedPoint, kind: &PointKind, time: f32) -> f32 {
    let mut alpha = (p.scale * 2.0).min(1.0);
    if p.depth < NEAR_FADE_DEPTH {
        alpha *= p.depth / NEAR_FADE_DEPTH;
    }
    match kind {
        PointKind::Photo { .. } if p.scale > 1.0 => alpha = 1.0,
        PointKind::Star {
            twinkle_speed,
            twinkle_phase,
        } => {
            alpha *= twinkle(time, *twinkle_speed, *twinkle_phase);
        }
        _ => {}
    }
    alpha.clamp(0.0, 1.0)
}

/// Multiplicative twinkle factor in [0.3, 1.0].
pub fn twinkle(time: f32, speed: f32, phase: f32) -> f32 {
    0.3 + 0.7 * (0.5 + 0.5 * (time * speed + phase).sin())
}
