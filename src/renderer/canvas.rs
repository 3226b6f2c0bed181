//! Immediate-mode 2D canvas and the per-frame paint pass
//!
//! Coordinates are logical pixels, origin top-left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes;
use super::vertex::Vertex;
use crate::color::Rgba;
use crate::consts::{BACKGROUND, RIPPLE_LINE_WIDTH};
use crate::sim::Frame;

/// A surface that can paint circles
pub trait Canvas {
    /// Wipe everything and fill with `color`
    fn clear(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Unfilled circle with the stroke centered on `radius`
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba);
}

/// Paint one simulated frame: background, ripples, then particles on top.
///
/// Zero-radius circles and fully transparent rings are skipped.
pub fn render_frame<C: Canvas + ?Sized>(canvas: &mut C, frame: &Frame) {
    canvas.clear(BACKGROUND);

    for ripple in &frame.ripples {
        if ripple.alpha > 0.0 && ripple.radius > 0.0 {
            canvas.stroke_circle(
                ripple.center,
                ripple.radius,
                RIPPLE_LINE_WIDTH,
                Rgba::WHITE.with_alpha(ripple.alpha),
            );
        }
    }

    for particle in &frame.particles {
        if particle.radius > 0.0 {
            canvas.fill_circle(particle.center, particle.radius, particle.color);
        }
    }
}

/// Canvas that tessellates into a triangle list for the GPU pipeline
#[derive(Debug)]
pub struct VertexCanvas {
    pub clear_color: Rgba,
    pub vertices: Vec<Vertex>,
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self {
            clear_color: BACKGROUND,
            vertices: Vec::new(),
        }
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        shapes::circle(
            &mut self.vertices,
            center,
            radius,
            color.to_linear(),
            shapes::segments_for(radius),
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        let half = line_width / 2.0;
        shapes::ring(
            &mut self.vertices,
            center,
            (radius - half).max(0.0),
            radius + half,
            color.to_linear(),
            shapes::segments_for(radius),
        );
    }
}

/// One recorded canvas call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Rgba),
    Fill {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Stroke {
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Rgba,
    },
}

/// Canvas that keeps the calls of the current frame (headless hosts)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count()
    }

    pub fn strokes(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgba) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Fill {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Stroke {
            center,
            radius,
            line_width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PALETTE;
    use crate::sim::{ParticleDraw, RippleDraw};

    fn sample_frame() -> Frame {
        Frame {
            ripples: vec![
                RippleDraw {
                    center: Vec2::new(5.0, 5.0),
                    radius: 40.0,
                    alpha: 0.5,
                },
                RippleDraw {
                    center: Vec2::new(5.0, 5.0),
                    radius: 150.0,
                    alpha: 0.0,
                },
            ],
            particles: vec![
                ParticleDraw {
                    center: Vec2::new(1.0, 2.0),
                    radius: 12.0,
                    color: PALETTE[3],
                },
                ParticleDraw {
                    center: Vec2::new(3.0, 4.0),
                    radius: 0.0,
                    color: PALETTE[4],
                },
            ],
        }
    }

    #[test]
    fn test_render_order_and_skips() {
        let mut canvas = RecordingCanvas::default();
        render_frame(&mut canvas, &sample_frame());

        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::Clear(BACKGROUND),
                DrawCommand::Stroke {
                    center: Vec2::new(5.0, 5.0),
                    radius: 40.0,
                    line_width: 1.0,
                    color: Rgba::WHITE.with_alpha(0.5),
                },
                DrawCommand::Fill {
                    center: Vec2::new(1.0, 2.0),
                    radius: 12.0,
                    color: PALETTE[3],
                },
            ]
        );
    }

    #[test]
    fn test_empty_frame_only_clears() {
        let mut canvas = RecordingCanvas::default();
        render_frame(&mut canvas, &Frame::default());
        assert_eq!(canvas.commands, vec![DrawCommand::Clear(BACKGROUND)]);
    }

    #[test]
    fn test_recording_resets_each_frame() {
        let mut canvas = RecordingCanvas::default();
        render_frame(&mut canvas, &sample_frame());
        render_frame(&mut canvas, &sample_frame());
        assert_eq!(canvas.fills(), 1);
        assert_eq!(canvas.strokes(), 1);
    }

    #[test]
    fn test_vertex_canvas_tessellates() {
        let mut canvas = VertexCanvas::default();
        render_frame(&mut canvas, &sample_frame());

        let ring = shapes::segments_for(40.0) as usize * 6;
        let disc = shapes::segments_for(12.0) as usize * 3;
        assert_eq!(canvas.vertices.len(), ring + disc);
        assert_eq!(canvas.clear_color, BACKGROUND);

        // Ring comes first, then the particle on top
        assert_eq!(canvas.vertices[0].color[3], 0.5);
        assert_eq!(canvas.vertices[ring].color, PALETTE[3].to_linear());

        render_frame(&mut canvas, &Frame::default());
        assert!(canvas.vertices.is_empty());
    }
}
