//! Screen-space transient simulations: falling hearts, shooting stars and
//! firework bursts. All three are independent of camera state and follow
//! the same per-tick order: spawn, advance, removal-check.

use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::*;
use crate::theme::SpriteShade;

const HEART_SHADES: [SpriteShade; 4] = [
    SpriteShade::Primary,
    SpriteShade::Accent,
    SpriteShade::Secondary,
    SpriteShade::White,
];

#[derive(Clone, Copy, Debug)]
pub struct Heart {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub fall_speed: f32,
    /// Phase offset of the sinusoidal horizontal drift.
    pub wobble: f32,
    pub rotation_deg: f32,
    pub spin_deg: f32,
    pub opacity: f32,
    pub shade: SpriteShade,
}

#[derive(Default)]
pub struct HeartField {
    pub hearts: Vec<Heart>,
    next_id: u32,
}

impl HeartField {
    /// Initial population scattered over the whole viewport.
    pub fn seed(&mut self, width: f32, height: f32, rng: &mut StdRng) {
        self.hearts.clear();
        for _ in 0..HEART_SEED_COUNT {
            let h = self.make_heart(width, height, true, rng);
            self.hearts.push(h);
        }
    }

    fn make_heart(&mut self, width: f32, height: f32, random_y: bool, rng: &mut StdRng) -> Heart {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Heart {
            id,
            x: rng.gen::<f32>() * width,
            y: if random_y {
                rng.gen::<f32>() * height
            } else {
                HEART_SPAWN_Y
            },
            size: rng.gen::<f32>() * 25.0 + 5.0,
            fall_speed: rng.gen::<f32>() * 1.5 + 0.5,
            wobble: rng.gen::<f32>() * TAU,
            rotation_deg: rng.gen::<f32>() * 360.0,
            spin_deg: (rng.gen::<f32>() - 0.5) * 2.0,
            opacity: rng.gen::<f32>() * 0.6 + 0.1,
            shade: HEART_SHADES[rng.gen_range(0..HEART_SHADES.len())],
        }
    }

    pub fn tick(&mut self, width: f32, height: f32, time: f32, rng: &mut StdRng) {
        if rng.gen_bool(HEART_SPAWN_CHANCE) {
            let h = self.make_heart(width, height, false, rng);
            self.hearts.push(h);
        }
        for h in &mut self.hearts {
            h.y += h.fall_speed;
            h.x += (h.wobble + time).sin() * 0.5;
            h.rotation_deg += h.spin_deg;
        }
        self.hearts.retain(|h| h.y <= height + HEART_DESPAWN_MARGIN);
    }

    /// Remove a heart by id, returning its last position and shade so a
    /// burst can be spawned there.
    pub fn pop(&mut self, id: u32) -> Option<(f32, f32, SpriteShade)> {
        let i = self.hearts.iter().position(|h| h.id == id)?;
        let h = self.hearts.swap_remove(i);
        Some((h.x, h.y, h.shade))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ShootingStar {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub speed: f32,
    pub angle: f32,
    pub opacity: f32,
}

#[derive(Default)]
pub struct ShootingStarField {
    pub stars: Vec<ShootingStar>,
}

impl ShootingStarField {
    pub fn tick(&mut self, width: f32, height: f32, rng: &mut StdRng) {
        if rng.gen_bool(SHOOTING_STAR_SPAWN_CHANCE) {
            self.stars.push(ShootingStar {
                x: rng.gen::<f32>() * width,
                y: rng.gen::<f32>() * (height * 0.7),
                length: rng.gen::<f32>() * 100.0 + 100.0,
                speed: rng.gen::<f32>() * 20.0 + 20.0,
                // Roughly diagonal, down and to the right.
                angle: std::f32::consts::FRAC_PI_4 + (rng.gen::<f32>() - 0.5) * 0.2,
                opacity: 1.0,
            });
        }
        for s in &mut self.stars {
            s.x += s.angle.cos() * s.speed;
            s.y += s.angle.sin() * s.speed;
            s.opacity -= SHOOTING_STAR_FADE;
        }
        self.stars
            .retain(|s| s.opacity > 0.0 && s.x <= width && s.y <= height);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FireworkSpark {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub shade: SpriteShade,
    pub opacity: f32,
    pub decay: f32,
}

#[derive(Default)]
pub struct Fireworks {
    pub sparks: Vec<FireworkSpark>,
}

impl Fireworks {
    /// One burst of sparks radiating from a popped heart. Bursts are only
    /// ever spawned by taps; the simulator never self-spawns.
    pub fn burst(&mut self, x: f32, y: f32, shade: SpriteShade, rng: &mut StdRng) {
        for _ in 0..BURST_SPARK_COUNT {
            let angle = rng.gen::<f32>() * TAU;
            let speed = rng.gen::<f32>() * 5.0 + 1.0;
            let spark_shade = match rng.gen_range(0..3) {
                0 => SpriteShade::White,
                1 => SpriteShade::Accent,
                _ => shade,
            };
            self.sparks.push(FireworkSpark {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: rng.gen::<f32>() * 2.0 + 1.0,
                shade: spark_shade,
                opacity: 1.0,
                decay: rng.gen::<f32>() * 0.02 + 0.01,
            });
        }
    }

    pub fn tick(&mut self) {
        for s in &mut self.sparks {
            s.x += s.vx;
            s.y += s.vy;
            s.vy += SPARK_GRAVITY;
            s.vx *= SPARK_DRAG;
            s.vy *= SPARK_DRAG;
            s.opacity -= s.decay;
        }
        self.sparks.retain(|s| s.opacity > 0.0);
    }
}
