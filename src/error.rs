//! Startup errors
//!
//! The motion pipeline itself cannot fail; only wiring up the page and the
//! GPU can.

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("canvas element not found: #{0}")]
    CanvasMissing(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
