//! Bounded random draws
//!
//! `uniform_int` is the ceiling of a continuous draw, so `min` itself only
//! comes up when the generator returns exactly 0. Callers rely on that skew.

use glam::Vec2;
use rand::Rng;

use crate::color::Rgba;
use crate::round2;

/// `ceil(random * (max - min) + min)`
///
/// Always a whole number; returned as `f32` so it can go straight into float
/// fields like radii.
#[inline]
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, max: f32, min: f32) -> f32 {
    uniform_float(rng, max, min).ceil()
}

/// `random * (max - min) + min`, in `[min, max)`
#[inline]
pub fn uniform_float<R: Rng + ?Sized>(rng: &mut R, max: f32, min: f32) -> f32 {
    rng.random::<f32>() * (max - min) + min
}

/// Pick a palette entry. The ceiling draw can land one past the end; that
/// index is clamped to the last entry.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgba]) -> Rgba {
    let Some(last) = palette.len().checked_sub(1) else {
        return Rgba::WHITE;
    };
    let index = uniform_int(rng, palette.len() as f32, 0.0) as usize;
    palette[index.min(last)]
}

/// -1 or 1 with equal probability
#[inline]
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random::<f32>() < 0.5 { -1.0 } else { 1.0 }
}

/// Per-frame displacement, each axis in `[-max, max]` rounded to 2 decimals
pub fn random_movement_vector<R: Rng + ?Sized>(rng: &mut R, max: f32) -> Vec2 {
    let x = uniform_float(rng, max, 0.0) * random_sign(rng);
    let y = uniform_float(rng, max, 0.0) * random_sign(rng);
    Vec2::new(round2(x), round2(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PALETTE, PARTICLE_SPEED_MAX};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn has_two_decimals(v: f32) -> bool {
        let scaled = v * 100.0;
        (scaled - scaled.round()).abs() < 1e-3
    }

    #[test]
    fn test_uniform_int_skews_away_from_min() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mins = (0..10_000)
            .filter(|_| uniform_int(&mut rng, 20.0, 15.0) == 15.0)
            .count();
        assert_eq!(mins, 0);
    }

    #[test]
    fn test_uniform_int_covers_upper_bound() {
        let mut rng = Pcg32::seed_from_u64(42);
        let draws: Vec<f32> = (0..1000).map(|_| uniform_int(&mut rng, 20.0, 15.0)).collect();
        assert!(draws.iter().all(|d| *d >= 15.0 && *d <= 20.0));
        assert!(draws.iter().all(|d| d.fract() == 0.0));
        assert!(draws.contains(&20.0));
        assert!(draws.contains(&16.0));
    }

    #[test]
    fn test_random_color_never_out_of_bounds() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..5000 {
            let c = random_color(&mut rng, &PALETTE);
            assert!(PALETTE.contains(&c));
        }
        assert_eq!(random_color(&mut rng, &[]), Rgba::WHITE);
    }

    #[test]
    fn test_random_sign_is_unit() {
        let mut rng = Pcg32::seed_from_u64(9);
        let signs: Vec<f32> = (0..200).map(|_| random_sign(&mut rng)).collect();
        assert!(signs.iter().all(|s| *s == 1.0 || *s == -1.0));
        assert!(signs.contains(&1.0) && signs.contains(&-1.0));
    }

    proptest! {
        #[test]
        fn prop_uniform_float_in_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let v = uniform_float(&mut rng, 0.3, 0.2);
            prop_assert!((0.2..=0.3).contains(&v));
        }

        #[test]
        fn prop_movement_vector_bounded_and_rounded(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mv = random_movement_vector(&mut rng, PARTICLE_SPEED_MAX);
            prop_assert!(mv.x.abs() <= 7.0 && mv.y.abs() <= 7.0);
            prop_assert!(has_two_decimals(mv.x), "x = {}", mv.x);
            prop_assert!(has_two_decimals(mv.y), "y = {}", mv.y);
        }
    }
}
