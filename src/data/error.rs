use thiserror::Error;

/// Errors raised when wrapping raw bytes in an [`ImageBuffer`](super::model::ImageBuffer).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("row stride {stride} is shorter than a row of {row_bytes} bytes")]
    StrideTooShort { stride: usize, row_bytes: usize },

    #[error("a {width}x{height} image with row stride {stride} does not fit in memory")]
    LayoutOverflow {
        width: u32,
        height: u32,
        stride: usize,
    },

    #[error("pixel data holds {actual} bytes, expected at least {expected}")]
    DataTooShort { expected: usize, actual: usize },
}
