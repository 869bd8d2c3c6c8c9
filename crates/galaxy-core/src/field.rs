//! Static 3D point population: galaxy dust, photo billboards, star sphere.
//!
//! Built once per session and fully replaced whenever the viewport or the
//! photo set changes. Positions are immutable for the lifetime of a build.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::*;
use crate::theme::DustShade;

#[derive(Clone, Copy, Debug)]
pub enum PointKind {
    Dust {
        shade: DustShade,
    },
    /// Billboard slot; `photo_index` wraps via modulo when there are fewer
    /// photos than slots. `spin_offset` staggers the self-rotation phase.
    Photo {
        photo_index: usize,
        spin_offset: f32,
    },
    Star {
        twinkle_speed: f32,
        twinkle_phase: f32,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct Point3 {
    pub pos: Vec3,
    /// Radius from the galaxy center at placement time; kept for reference,
    /// never re-derived.
    pub ring_radius: f32,
    pub size: f32,
    /// Initial orbital angle, reused as the billboard rotation base.
    pub angle: f32,
    pub kind: PointKind,
}

impl Point3 {
    pub fn is_photo(&self) -> bool {
        matches!(self.kind, PointKind::Photo { .. })
    }
}

/// Uniformly distributed direction via inverse-CDF spherical sampling:
/// azimuth uniform in [0, 2pi), polar angle from arccos(2v - 1) so that
/// cos(phi) is uniform rather than phi itself.
pub fn random_sphere_dir(rng: &mut StdRng) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

pub struct ParticleField {
    pub points: Vec<Point3>,
}

impl ParticleField {
    /// Build the full population. Billboards are only placed when at least
    /// one photo exists.
    pub fn build(photo_count: usize, rng: &mut StdRng) -> Self {
        let mut points =
            Vec::with_capacity(DUST_COUNT + STAR_COUNT + if photo_count > 0 { PHOTO_SLOTS } else { 0 });

        // Galaxy ring dust: flat disk, ~70/30 primary/secondary split.
        for _ in 0..DUST_COUNT {
            let angle = rng.gen::<f32>() * TAU;
            let radius = RING_INNER_RADIUS + rng.gen::<f32>() * (RING_OUTER_RADIUS - RING_INNER_RADIUS);
            let shade = if rng.gen::<f32>() > 0.3 {
                DustShade::Primary
            } else {
                DustShade::Secondary
            };
            points.push(Point3 {
                pos: Vec3::new(
                    angle.cos() * radius,
                    (rng.gen::<f32>() - 0.5) * RING_THICKNESS,
                    angle.sin() * radius,
                ),
                ring_radius: radius,
                size: rng.gen::<f32>() * 2.5 + 0.5,
                angle,
                kind: PointKind::Dust { shade },
            });
        }

        // Photo billboards: evenly spread around the ring with jitter,
        // restricted to the mid-band so they sit inside the dust.
        if photo_count > 0 {
            for i in 0..PHOTO_SLOTS {
                let angle = (i as f32 / PHOTO_SLOTS as f32) * TAU + rng.gen::<f32>() * 0.5;
                let radius = RING_INNER_RADIUS + 50.0
                    + rng.gen::<f32>() * (RING_OUTER_RADIUS - RING_INNER_RADIUS - 100.0);
                points.push(Point3 {
                    pos: Vec3::new(
                        angle.cos() * radius,
                        (rng.gen::<f32>() - 0.5) * BILLBOARD_THICKNESS,
                        angle.sin() * radius,
                    ),
                    ring_radius: radius,
                    size: rng.gen::<f32>() * 50.0 + 40.0,
                    angle,
                    kind: PointKind::Photo {
                        photo_index: i % photo_count,
                        spin_offset: rng.gen::<f32>() * TAU,
                    },
                });
            }
        }

        // Background stars on a distant spherical shell.
        for _ in 0..STAR_COUNT {
            let r = STAR_SHELL_MIN + rng.gen::<f32>() * STAR_SHELL_SPAN;
            let pos = random_sphere_dir(rng) * r;
            points.push(Point3 {
                pos,
                ring_radius: r,
                size: rng.gen::<f32>() * 2.0,
                angle: 0.0,
                kind: PointKind::Star {
                    twinkle_speed: rng.gen::<f32>() * 3.0 + 0.5,
                    twinkle_phase: rng.gen::<f32>() * TAU,
                },
            });
        }

        log::debug!(
            "field built: {} points ({} photo slots)",
            points.len(),
            if photo_count > 0 { PHOTO_SLOTS } else { 0 }
        );
        Self { points }
    }
}
