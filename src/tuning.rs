//! Spawn ranges as data
//!
//! `Tuning::default()` is the shipped table; the app never loads another one.
//! Tests build their own to pin a range to a single value.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::consts::*;

/// Closed numeric range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always yields `value`
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }
}

/// Spawn parameters for particles and ripples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Particles per click, `max` exclusive
    pub burst_min: u32,
    pub burst_max: u32,
    pub palette: Vec<Rgba>,
    pub particle_radius: Range,
    pub particle_decay: Range,
    /// Max absolute per-axis movement
    pub particle_speed: f32,
    pub particle_center_offset: Range,
    pub ripple_max_radius: Range,
    pub ripple_grow: Range,
    pub ripple_initial_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            burst_min: BURST_MIN,
            burst_max: BURST_MAX,
            palette: PALETTE.to_vec(),
            particle_radius: Range::new(PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
            particle_decay: Range::new(PARTICLE_DECAY_MIN, PARTICLE_DECAY_MAX),
            particle_speed: PARTICLE_SPEED_MAX,
            particle_center_offset: Range::new(PARTICLE_CENTER_MIN, PARTICLE_CENTER_MAX),
            ripple_max_radius: Range::new(RIPPLE_MAX_RADIUS_MIN, RIPPLE_MAX_RADIUS_MAX),
            ripple_grow: Range::new(RIPPLE_GROW_MIN, RIPPLE_GROW_MAX),
            ripple_initial_radius: RIPPLE_INITIAL_RADIUS,
        }
    }
}
