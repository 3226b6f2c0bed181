//! Per-frame simulation step
//!
//! Each step advances an entity and yields what to draw for this frame, or
//! `None` when the entity has expired and must be dropped. The expiry test runs
//! before any mutation, so an entity is always drawn on the frame it reaches
//! its end state and removed on the next one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::easing::{quintic_ease_in, quintic_ease_out};
use super::state::{Particle, Ripple, SceneState};
use crate::color::Rgba;

/// Filled circle for one particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleDraw {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// Stroked circle for one ripple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RippleDraw {
    pub center: Vec2,
    pub radius: f32,
    /// Stroke opacity, 0..=1
    pub alpha: f32,
}

/// Draw list produced by one tick, in paint order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub ripples: Vec<RippleDraw>,
    pub particles: Vec<ParticleDraw>,
}

/// Shrink a particle by one step and move it.
///
/// The draw record uses the position from before this frame's movement.
pub fn step_particle(particle: &mut Particle) -> Option<ParticleDraw> {
    if particle.is_expired() {
        return None;
    }

    let diff = particle.radius - particle.decay_step;
    particle.radius = diff.max(0.0);

    let radius = if diff - particle.decay_step <= 0.0 {
        0.0
    } else {
        quintic_ease_in(diff / particle.initial_radius) * particle.initial_radius
    };

    let draw = ParticleDraw {
        center: particle.pos,
        radius,
        color: particle.color,
    };
    particle.advance_position();

    Some(draw)
}

/// Grow a ripple by one step.
pub fn step_ripple(ripple: &mut Ripple) -> Option<RippleDraw> {
    if ripple.is_expired() {
        return None;
    }

    ripple.radius += ripple.grow_step;

    // Past (max - initial) the ring has fully faded; clamp so alpha and the
    // eased radius stay in range.
    let t = (((ripple.max_radius - ripple.initial_radius) - ripple.radius) / ripple.max_radius)
        .clamp(0.0, 1.0);

    Some(RippleDraw {
        center: ripple.pos,
        radius: (1.0 - quintic_ease_out(t)) * ripple.max_radius,
        alpha: t,
    })
}

/// Advance every live entity one frame, ripples first.
///
/// Each collection is replaced by its survivors; the returned frame holds one
/// draw record per survivor.
pub fn tick(state: &mut SceneState) -> Frame {
    let mut frame = Frame {
        ripples: Vec::with_capacity(state.ripples.len()),
        particles: Vec::with_capacity(state.particles.len()),
    };

    state.ripples.retain_mut(|ripple| match step_ripple(ripple) {
        Some(draw) => {
            frame.ripples.push(draw);
            true
        }
        None => false,
    });

    state.particles.retain_mut(|particle| match step_particle(particle) {
        Some(draw) => {
            frame.particles.push(draw);
            true
        }
        None => false,
    });

    state.frame += 1;
    frame
}
