//! Loop driver
//!
//! Owns the scene and ties the click handler and frame callback together.
//! Hosts call [`Animation::click`] from their pointer handler and
//! [`Animation::frame`] once per display refresh, rescheduling while it
//! returns `true`.

use glam::Vec2;

use crate::renderer::{Canvas, render_frame};
use crate::sim::{SceneSnapshot, SceneState, burst, tick};
use crate::tuning::Tuning;

pub struct Animation {
    scene: SceneState,
    running: bool,
}

impl Animation {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            scene: SceneState::with_tuning(seed, tuning),
            running: true,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Pointer click at logical page coordinates. Returns particles spawned.
    pub fn click(&mut self, x: f32, y: f32) -> usize {
        if !self.running {
            return 0;
        }
        let count = burst(&mut self.scene, Vec2::new(x, y));
        log::debug!(
            "Burst at ({:.0}, {:.0}): {} particles, {} live",
            x,
            y,
            count,
            self.scene.particles.len()
        );
        count
    }

    /// One display frame: advance the scene and paint it.
    ///
    /// Returns whether the host should schedule another frame.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> bool {
        if !self.running {
            return false;
        }
        let frame = tick(&mut self.scene);
        render_frame(canvas, &frame);
        true
    }

    /// Teardown hook: drop all entities and stop accepting frames/clicks
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.scene.clear();
            log::info!("Animation stopped after {} frames", self.scene.frame);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Nothing alive on screen
    pub fn is_idle(&self) -> bool {
        self.scene.is_empty()
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        self.scene.snapshot()
    }
}
