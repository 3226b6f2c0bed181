//! Error types for host setup
//!
//! The simulation itself is total; only the host (window, canvas, GPU) can fail.

use thiserror::Error;

/// Failure while bringing up the drawing surface
#[derive(Error, Debug)]
pub enum InitError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}
