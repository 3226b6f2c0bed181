//! Quintic easing curves over normalized progress

/// `t^5`
#[inline]
pub fn quintic_ease_in(t: f32) -> f32 {
    t * t * t * t * t
}

/// `1 + (t - 1)^5`
#[inline]
pub fn quintic_ease_out(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 + u * u * u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(quintic_ease_in(0.0), 0.0);
        assert_eq!(quintic_ease_in(1.0), 1.0);
        assert_eq!(quintic_ease_out(0.0), 0.0);
        assert_eq!(quintic_ease_out(1.0), 1.0);
    }

    #[test]
    fn test_midpoint_shape() {
        // Ease-in lags, ease-out leads
        assert!((quintic_ease_in(0.5) - 0.03125).abs() < 1e-6);
        assert!((quintic_ease_out(0.5) - 0.96875).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_unit_interval_maps_to_unit_interval(t in 0.0f32..=1.0) {
            prop_assert!((0.0..=1.0).contains(&quintic_ease_in(t)));
            prop_assert!((0.0..=1.0).contains(&quintic_ease_out(t)));
        }
    }
}
