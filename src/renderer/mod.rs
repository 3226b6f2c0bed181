//! Rendering
//!
//! The paint pass targets the [`Canvas`] trait; [`VertexCanvas`] turns it into
//! triangles for the WebGPU pipeline and [`RecordingCanvas`] keeps the calls
//! for headless runs.

pub mod canvas;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas, VertexCanvas, render_frame};
pub use pipeline::RenderState;
pub use vertex::Vertex;
