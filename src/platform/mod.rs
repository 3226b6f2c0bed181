//! Platform abstraction layer
//!
//! Drawing happens in logical (CSS) pixels with the origin at the top-left.
//! The surface itself is sized in physical pixels: logical size times the
//! device pixel ratio.

use glam::Vec2;

/// Logical drawing area plus device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical width in CSS pixels
    pub width: f32,
    /// Logical height in CSS pixels
    pub height: f32,
    /// Device pixel ratio
    pub scale: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            scale: if scale > 0.0 { scale } else { 1.0 },
        }
    }

    /// Backing surface size in device pixels (truncated, never zero)
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.scale) as u32;
        let h = (self.height * self.scale) as u32;
        (w.max(1), h.max(1))
    }

    /// Map a logical point to normalized device coordinates (y up)
    #[inline]
    pub fn to_ndc(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x / self.width * 2.0 - 1.0,
            1.0 - point.y / self.height * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size_scales_by_dpr() {
        let vp = Viewport::new(800.0, 600.0, 2.0);
        assert_eq!(vp.physical_size(), (1600, 1200));

        let vp = Viewport::new(333.0, 100.0, 1.5);
        assert_eq!(vp.physical_size(), (499, 150));
    }

    #[test]
    fn test_bad_scale_falls_back_to_one() {
        let vp = Viewport::new(100.0, 50.0, 0.0);
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.physical_size(), (100, 50));
    }

    #[test]
    fn test_ndc_corners() {
        let vp = Viewport::new(800.0, 600.0, 2.0);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }
}
