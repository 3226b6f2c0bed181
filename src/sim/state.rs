//! Scene state and entity types
//!
//! `SceneState` is the only owner of live entities; nothing else holds
//! references into the collections.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::tuning::Tuning;

/// A burst circle that shrinks and drifts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Current center
    pub pos: Vec2,
    /// Spawn origin (not used for drawing)
    pub initial_pos: Vec2,
    /// Spawn origin offset by a random diagonal (not used for drawing)
    pub center: Vec2,
    /// Displacement applied every frame
    pub movement: Vec2,
    pub radius: f32,
    pub initial_radius: f32,
    /// Radius decrement per frame
    pub decay_step: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn is_expired(&self) -> bool {
        self.radius <= 0.0
    }

    /// Apply one frame of movement
    #[inline]
    pub fn advance_position(&mut self) {
        self.pos += self.movement;
    }
}

/// An expanding ring at a click point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ripple {
    /// Click point (never moves)
    pub pos: Vec2,
    pub radius: f32,
    /// Offset subtracted in the easing term
    pub initial_radius: f32,
    pub max_radius: f32,
    /// Radius increment per frame
    pub grow_step: f32,
}

impl Ripple {
    /// True once the ring has reached its end or the next step would get there
    pub fn is_expired(&self) -> bool {
        self.radius >= self.max_radius || self.radius + self.grow_step >= self.max_radius
    }
}

/// Everything the loop driver owns between frames
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Live ripples, oldest first
    pub ripples: Vec<Ripple>,
    /// Live particles, oldest first
    pub particles: Vec<Particle>,
    /// Most recent click, in logical pixels
    pub last_click: Option<Vec2>,
    /// Frames simulated so far
    pub frame: u64,
}

impl SceneState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            ripples: Vec::new(),
            particles: Vec::new(),
            last_click: None,
            frame: 0,
        }
    }

    /// No live entities
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty() && self.particles.is_empty()
    }

    /// Drop every live entity (keeps RNG and counters)
    pub fn clear(&mut self) {
        self.ripples.clear();
        self.particles.clear();
    }

    /// Serializable view of the scene for logging/diagnostics
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            seed: self.seed,
            frame: self.frame,
            last_click: self.last_click,
            ripples: self.ripples.len(),
            particles: self.particles.len(),
        }
    }
}

/// Counts-only summary of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub seed: u64,
    pub frame: u64,
    pub last_click: Option<Vec2>,
    pub ripples: usize,
    pub particles: usize,
}
