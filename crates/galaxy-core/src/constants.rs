// Shared tuning constants for the galaxy simulation.

// Field population
pub const DUST_COUNT: usize = 3000;
pub const PHOTO_SLOTS: usize = 50; // billboard slots cycling through the photo list
pub const STAR_COUNT: usize = 300;

// Ring geometry (world units)
pub const RING_INNER_RADIUS: f32 = 350.0;
pub const RING_OUTER_RADIUS: f32 = 1400.0;
pub const RING_THICKNESS: f32 = 40.0; // vertical jitter of the dust disk
pub const BILLBOARD_THICKNESS: f32 = 60.0;

// Star sphere shell (world units)
pub const STAR_SHELL_MIN: f32 = 3000.0;
pub const STAR_SHELL_SPAN: f32 = 2000.0;

// Projection
pub const FOCAL_LENGTH: f32 = 800.0;
pub const NEAR_FADE_DEPTH: f32 = 50.0; // linear alpha ramp before the camera plane
pub const PLANET_RADIUS: f32 = 180.0;
pub const BILLBOARD_SPIN_RATE: f32 = 0.5; // radians per time unit of self-rotation

// Camera
pub const INITIAL_ZOOM: f32 = 2500.0;
pub const ZOOM_MIN: f32 = -1200.0; // negative lets the camera cross the ring plane
pub const ZOOM_MAX: f32 = 8000.0;
pub const INITIAL_PITCH: f32 = -std::f32::consts::FRAC_PI_6;
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.1;
pub const EASE_FACTOR: f32 = 0.1; // fraction of remaining distance per tick
pub const MOUSE_SENSITIVITY: f32 = 0.005;
pub const TOUCH_SENSITIVITY: f32 = 0.008;
pub const WHEEL_ZOOM_SENSITIVITY: f32 = 3.5;
pub const PINCH_ZOOM_SENSITIVITY: f32 = 5.0;
pub const AUTO_ROTATE_INITIAL: f32 = 0.001;
pub const AUTO_ROTATE_IDLE: f32 = 0.0002; // slower drift after the user lets go

// Per-tick time advance (the loop runs at display refresh)
pub const TIME_STEP: f32 = 0.01;

// Hearts
pub const HEART_SEED_COUNT: usize = 60;
pub const HEART_SPAWN_CHANCE: f64 = 0.4;
pub const HEART_SPAWN_Y: f32 = -50.0;
pub const HEART_DESPAWN_MARGIN: f32 = 50.0;
pub const HEART_HIT_RADIUS_FACTOR: f32 = 2.5;

// Shooting stars
pub const SHOOTING_STAR_SPAWN_CHANCE: f64 = 0.025;
pub const SHOOTING_STAR_FADE: f32 = 0.02; // linear opacity decay per tick

// Fireworks
pub const BURST_SPARK_COUNT: usize = 30;
pub const SPARK_GRAVITY: f32 = 0.08;
pub const SPARK_DRAG: f32 = 0.95;
