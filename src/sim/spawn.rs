//! Entity factories

use glam::Vec2;
use rand::Rng;

use super::random::{random_color, random_movement_vector, uniform_float, uniform_int};
use super::state::{Particle, Ripple, SceneState};
use crate::tuning::Tuning;

/// Number of particles for one click, in `[burst_min, burst_max)`.
///
/// The ceiling draw only lands on `burst_min` when the generator returns
/// exactly zero, so the count is effectively `burst_min + 1..=burst_max - 1`
/// (31..=39 with the default table).
pub fn burst_size<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> usize {
    let min = tuning.burst_min as f32;
    // Ceiling draw over [min, max - 1] keeps the upper bound exclusive
    let max = (tuning.burst_max.max(tuning.burst_min + 1) - 1) as f32;
    uniform_int(rng, max, min) as usize
}

/// `count` particles at `origin`, each with its own random parameters
pub fn spawn_particles<R: Rng + ?Sized>(
    rng: &mut R,
    tuning: &Tuning,
    count: usize,
    origin: Vec2,
) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let offset = uniform_int(
                rng,
                tuning.particle_center_offset.max,
                tuning.particle_center_offset.min,
            );
            let radius = uniform_int(rng, tuning.particle_radius.max, tuning.particle_radius.min);
            Particle {
                pos: origin,
                initial_pos: origin,
                center: origin + Vec2::splat(offset),
                movement: random_movement_vector(rng, tuning.particle_speed),
                radius,
                initial_radius: radius,
                decay_step: uniform_float(rng, tuning.particle_decay.max, tuning.particle_decay.min),
                color: random_color(rng, &tuning.palette),
            }
        })
        .collect()
}

/// A single ripple at `origin`
pub fn spawn_ripple<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning, origin: Vec2) -> Ripple {
    Ripple {
        pos: origin,
        radius: 0.0,
        initial_radius: tuning.ripple_initial_radius,
        max_radius: uniform_int(rng, tuning.ripple_max_radius.max, tuning.ripple_max_radius.min),
        grow_step: uniform_float(rng, tuning.ripple_grow.max, tuning.ripple_grow.min),
    }
}

/// Handle a click at `origin`: one ripple plus a burst of particles.
/// Returns the number of particles added.
pub fn burst(state: &mut SceneState, origin: Vec2) -> usize {
    state.last_click = Some(origin);

    let count = burst_size(&mut state.rng, &state.tuning);
    let particles = spawn_particles(&mut state.rng, &state.tuning, count, origin);
    state.particles.extend(particles);

    let ripple = spawn_ripple(&mut state.rng, &state.tuning, origin);
    state.ripples.push(ripple);

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use crate::tuning::Range;

    fn in_range(range: Range, value: f32) -> bool {
        (range.min..=range.max).contains(&value)
    }

    #[test]
    fn test_click_at_100_100() {
        let mut state = SceneState::new(12345);
        let origin = Vec2::new(100.0, 100.0);

        let added = burst(&mut state, origin);

        assert!((30..=39).contains(&added), "burst of {}", added);
        assert_eq!(state.particles.len(), added);
        assert_eq!(state.ripples.len(), 1);
        assert_eq!(state.last_click, Some(origin));
        assert!(state.particles.iter().all(|p| p.pos == origin));
        assert_eq!(state.ripples[0].pos, origin);
    }

    #[test]
    fn test_clicks_accumulate() {
        let mut state = SceneState::new(1);
        let a = burst(&mut state, Vec2::new(10.0, 20.0));
        let b = burst(&mut state, Vec2::new(300.0, 40.0));
        assert_eq!(state.particles.len(), a + b);
        assert_eq!(state.ripples.len(), 2);
        assert_eq!(state.last_click, Some(Vec2::new(300.0, 40.0)));
    }

    #[test]
    fn test_burst_size_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        let tuning = Tuning::default();
        for _ in 0..5000 {
            let n = burst_size(&mut rng, &tuning);
            assert!((30..40).contains(&n));
        }
    }

    #[test]
    fn test_burst_size_hits_both_edges() {
        let mut rng = Pcg32::seed_from_u64(123);
        let tuning = Tuning::default();
        let sizes: Vec<usize> = (0..5000).map(|_| burst_size(&mut rng, &tuning)).collect();
        assert!(sizes.contains(&31));
        assert!(sizes.contains(&39));
        assert!(sizes.iter().all(|n| (30..=39).contains(n)));
    }

    #[test]
    fn test_particle_fields_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();
        let origin = Vec2::new(50.0, 60.0);
        for p in spawn_particles(&mut rng, &tuning, 500, origin) {
            assert!(in_range(tuning.particle_radius, p.initial_radius));
            assert_eq!(p.radius, p.initial_radius);
            assert_eq!(p.initial_radius.fract(), 0.0);
            assert!(p.decay_step >= 0.2 && p.decay_step <= 0.3);
            assert!(p.movement.x.abs() <= 7.0 && p.movement.y.abs() <= 7.0);
            assert!(tuning.palette.contains(&p.color));
            assert_eq!(p.initial_pos, origin);
            let offset = p.center - origin;
            assert_eq!(offset.x, offset.y);
            assert!(in_range(tuning.particle_center_offset, offset.x));
        }
    }

    #[test]
    fn test_particles_do_not_alias() {
        let mut rng = Pcg32::seed_from_u64(8);
        let origin = Vec2::new(1.0, 2.0);
        let mut particles = spawn_particles(&mut rng, &Tuning::default(), 2, origin);
        particles[0].movement = Vec2::new(3.0, 3.0);
        particles[0].advance_position();
        assert_eq!(particles[0].pos, Vec2::new(4.0, 5.0));
        assert_eq!(particles[0].initial_pos, origin);
        assert_eq!(particles[1].pos, origin);
    }

    #[test]
    fn test_ripple_fields_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(11);
        let tuning = Tuning::default();
        for _ in 0..500 {
            let r = spawn_ripple(&mut rng, &tuning, Vec2::ZERO);
            assert_eq!(r.radius, 0.0);
            assert_eq!(r.initial_radius, 50.0);
            assert!(in_range(tuning.ripple_max_radius, r.max_radius));
            assert!(r.grow_step >= 3.0 && r.grow_step <= 4.0);
        }
    }

    #[test]
    fn test_same_seed_same_burst() {
        let mut a = SceneState::new(2024);
        let mut b = SceneState::new(2024);
        burst(&mut a, Vec2::new(7.0, 7.0));
        burst(&mut b, Vec2::new(7.0, 7.0));
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.ripples, b.ripples);
    }
}
