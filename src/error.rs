use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),

    #[error("failed to resize pixel buffer: {0}")]
    Resize(#[from] pixels::TextureError),

    #[error("failed to read font {}: {source}", .path.display())]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid TrueType/OpenType font", .0.display())]
    InvalidFont(PathBuf),

    #[error("cannot render a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("failed to write snapshot: {0}")]
    Snapshot(#[from] image::ImageError),
}
