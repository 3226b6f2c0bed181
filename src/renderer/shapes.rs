//! Triangle tessellation for circles and rings

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Fewest segments used for any circle
pub const MIN_SEGMENTS: u32 = 12;
/// Most segments used for any circle
pub const MAX_SEGMENTS: u32 = 96;

/// Segment count that keeps edges smooth at a given radius (logical px)
pub fn segments_for(radius: f32) -> u32 {
    ((radius * 0.75).ceil() as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

#[inline]
fn rim(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Append a filled circle (triangle fan unrolled into a list)
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let p1 = rim(center, radius, theta1);
        let p2 = rim(center, radius, theta2);

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
        out.push(Vertex::new(p2.x, p2.y, color));
    }
}

/// Append a ring (hollow circle) between two radii
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    out.reserve((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = rim(center, inner_radius, theta1);
        let outer1 = rim(center, outer_radius, theta1);
        let inner2 = rim(center, inner_radius, theta2);
        let outer2 = rim(center, outer_radius, theta2);

        // Two triangles per segment
        out.push(Vertex::new(inner1.x, inner1.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(inner2.x, inner2.y, color));

        out.push(Vertex::new(inner2.x, inner2.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(outer2.x, outer2.y, color));
    }
}
