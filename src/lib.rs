//! Click Burst - particle bursts and ripples spawned by pointer clicks
//!
//! Core modules:
//! - `sim`: Seeded simulation (random generators, spawning, per-frame step)
//! - `renderer`: Canvas abstraction, tessellation and the WebGPU pipeline
//! - `driver`: Loop driver owning the scene (click handling, frame pass, stop hook)
//! - `platform`: Viewport sizing and coordinate mapping
//! - `tuning`: Spawn ranges as data

pub mod color;
pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use color::Rgba;
pub use driver::Animation;
pub use error::InitError;
pub use tuning::Tuning;

/// Animation constants (defaults for [`Tuning`])
pub mod consts {
    use crate::color::Rgba;

    /// Surface background, painted every frame
    pub const BACKGROUND: Rgba = Rgba::from_hex(0x0E1111);

    /// Particle fill palette
    pub const PALETTE: [Rgba; 19] = [
        Rgba::from_hex(0xfff176),
        Rgba::from_hex(0xff8a65),
        Rgba::from_hex(0x81c784),
        Rgba::from_hex(0x4fc3f7),
        Rgba::from_hex(0x9575cd),
        Rgba::from_hex(0xf44336),
        Rgba::from_hex(0xe77e23),
        Rgba::from_hex(0xf1c40f),
        Rgba::from_hex(0x16a086),
        Rgba::from_hex(0xafcfea),
        Rgba::from_hex(0x004156),
        Rgba::from_hex(0x70e852),
        Rgba::from_hex(0xfed876),
        Rgba::from_hex(0xf85c50),
        Rgba::from_hex(0xf5b2ac),
        Rgba::from_hex(0x460000),
        Rgba::from_hex(0xffbeed),
        Rgba::from_hex(0x380438),
        Rgba::from_hex(0x852eba),
    ];

    /// Particles per click (max exclusive)
    pub const BURST_MIN: u32 = 30;
    pub const BURST_MAX: u32 = 40;

    /// Particle initial radius range (logical px)
    pub const PARTICLE_RADIUS_MIN: f32 = 15.0;
    pub const PARTICLE_RADIUS_MAX: f32 = 20.0;
    /// Particle radius decrement per frame
    pub const PARTICLE_DECAY_MIN: f32 = 0.2;
    pub const PARTICLE_DECAY_MAX: f32 = 0.3;
    /// Max per-axis displacement per frame
    pub const PARTICLE_SPEED_MAX: f32 = 7.0;
    /// Offset range of the retained `center` vector
    pub const PARTICLE_CENTER_MIN: f32 = 300.0;
    pub const PARTICLE_CENTER_MAX: f32 = 400.0;

    /// Ripple max radius range (logical px)
    pub const RIPPLE_MAX_RADIUS_MIN: f32 = 100.0;
    pub const RIPPLE_MAX_RADIUS_MAX: f32 = 200.0;
    /// Ripple radius increment per frame
    pub const RIPPLE_GROW_MIN: f32 = 3.0;
    pub const RIPPLE_GROW_MAX: f32 = 4.0;
    /// Offset subtracted in the ripple easing term
    pub const RIPPLE_INITIAL_RADIUS: f32 = 50.0;
    /// Ripple stroke width (logical px)
    pub const RIPPLE_LINE_WIDTH: f32 = 1.0;
}

/// Round to 2 decimal places
#[inline]
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
