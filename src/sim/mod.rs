//! Burst simulation
//!
//! All animation logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Seeded RNG only (a scene replays exactly from its seed and clicks)
//! - One step per displayed frame, no wall-clock time
//! - Stable iteration order (oldest entity first)

pub mod easing;
pub mod random;
pub mod spawn;
pub mod state;
pub mod tick;

pub use easing::{quintic_ease_in, quintic_ease_out};
pub use random::{random_color, random_movement_vector, random_sign, uniform_float, uniform_int};
pub use spawn::{burst, burst_size, spawn_particles, spawn_ripple};
pub use state::{Particle, Ripple, SceneSnapshot, SceneState};
pub use tick::{Frame, ParticleDraw, RippleDraw, step_particle, step_ripple, tick};
