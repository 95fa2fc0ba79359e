//! Scene math for the solar-system viewer: fixed-increment circular orbits,
//! camera-follow interpolation, asteroid-belt generation, compact-object
//! jitter and the selection state machine. Nothing in here touches the
//! engine, so all of it is testable without a window.

pub mod belt;
pub mod camera;
pub mod focus;
pub mod orbit;
pub mod shake;

pub use belt::AsteroidSeed;
pub use camera::FollowCamera;
pub use focus::{CameraPose, Focus};
pub use orbit::CircularOrbit;
