pub mod animation;
pub mod audio;
pub mod config;
pub mod constants;
pub mod field;
pub mod particle;
pub mod reveal;
pub mod signals;
pub mod style;
pub mod surface;
pub mod transition;

pub use animation::*;
pub use audio::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use particle::*;
pub use reveal::*;
pub use signals::*;
pub use style::*;
pub use surface::*;
pub use transition::*;
