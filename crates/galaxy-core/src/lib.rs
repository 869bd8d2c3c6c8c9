pub mod camera;
pub mod constants;
pub mod field;
pub mod hit;
pub mod project;
pub mod scene;
pub mod sprites;
pub mod theme;

pub use camera::*;
pub use constants::*;
pub use field::*;
pub use hit::*;
pub use project::*;
pub use scene::*;
pub use sprites::*;
pub use theme::*;
