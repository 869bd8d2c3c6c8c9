//! The owned simulation context shared by input handling and the frame
//! loop. Everything mutable lives here; event handlers mutate it between
//! frames and the per-frame tick advances it, so there is never partial
//! state visible across a frame boundary.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::CameraController;
use crate::constants::TIME_STEP;
use crate::field::ParticleField;
use crate::hit::HitRegistry;
use crate::project::{project_field, DrawItem};
use crate::sprites::{Fireworks, HeartField, ShootingStarField};
use crate::theme::Theme;

/// Result of a pointer-down, resolved against the previous frame's hit
/// regions before any camera logic runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    /// A heart was popped; a firework burst now exists at its position.
    HeartPopped,
    /// A photo billboard was tapped; the host should focus this photo.
    PhotoFocused(usize),
    /// Nothing interactive was hit; a camera drag has begun.
    BeginDrag,
}

pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub time: f32,
    pub theme: Theme,
    pub camera: CameraController,
    pub field: ParticleField,
    pub hearts: HeartField,
    pub shooting: ShootingStarField,
    pub fireworks: Fireworks,
    pub hits: HitRegistry,
    /// Scratch draw list, rebuilt by `tick` and consumed by the painter.
    pub draw_items: Vec<DrawItem>,
    pub photo_count: usize,
    rng: StdRng,
}

impl Scene {
    pub fn new(width: f32, height: f32, theme: Theme, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::build(0, &mut rng);
        let mut hearts = HeartField::default();
        hearts.seed(width, height, &mut rng);
        Self {
            width,
            height,
            time: 0.0,
            theme,
            camera: CameraController::default(),
            field,
            hearts,
            shooting: ShootingStarField::default(),
            fireworks: Fireworks::default(),
            hits: HitRegistry::default(),
            draw_items: Vec::new(),
            photo_count: 0,
            rng,
        }
    }

    /// Advance one frame: camera easing, all three sprite simulations,
    /// heart hit regions, then the projected draw list. Photo regions are
    /// appended afterwards by the painter, which knows image readiness.
    pub fn tick(&mut self) {
        self.time += TIME_STEP;
        self.camera.step();

        self.shooting.tick(self.width, self.height, &mut self.rng);
        self.hearts
            .tick(self.width, self.height, self.time, &mut self.rng);
        self.fireworks.tick();

        self.hits.clear();
        for h in &self.hearts.hearts {
            self.hits.register_heart(h);
        }

        project_field(
            &self.field,
            &self.camera,
            self.width,
            self.height,
            &mut self.draw_items,
        );
    }

    /// Resolve a tap/click at canvas coordinates. Hearts win over photos;
    /// a miss on both starts a camera drag.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Interaction {
        if let Some(id) = self.hits.find_heart(x, y) {
            if let Some((hx, hy, shade)) = self.hearts.pop(id) {
                self.fireworks.burst(hx, hy, shade, &mut self.rng);
                return Interaction::HeartPopped;
            }
        }
        if let Some(index) = self.hits.find_photo(x, y) {
            return Interaction::PhotoFocused(index);
        }
        self.camera.pointer_down(x, y);
        Interaction::BeginDrag
    }

    /// Viewport change: rebuild the field, keep camera and sprites.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.field = ParticleField::build(self.photo_count, &mut self.rng);
        log::info!("viewport {}x{}, field rebuilt", width as u32, height as u32);
    }

    /// Photo set change: billboards re-cycle through the new count.
    pub fn set_photo_count(&mut self, count: usize) {
        self.photo_count = count;
        self.field = ParticleField::build(count, &mut self.rng);
        log::info!("photo set changed ({count} photos), field rebuilt");
    }

    /// Swap the palette only; positions and sprite state are untouched.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
