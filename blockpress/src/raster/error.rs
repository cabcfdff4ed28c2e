//! Error types for the raster image model.

use thiserror::Error;

/// Errors that can occur when constructing or converting raster images.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Pixel buffer does not hold enough floats for the described image.
    #[error("pixel buffer too small: need at least {expected} floats, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    /// Channel count outside the supported range.
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u32),

    /// Image shape cannot be represented in the requested target format.
    #[error("unsupported image shape {width}×{height}×{depth}: {reason}")]
    UnsupportedShape {
        width: u32,
        height: u32,
        depth: u32,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_too_small_display() {
        let err = RasterError::BufferTooSmall {
            expected: 64,
            actual: 16,
        };
        assert_eq!(
            err.to_string(),
            "pixel buffer too small: need at least 64 floats, got 16"
        );
    }

    #[test]
    fn test_unsupported_channels_display() {
        let err = RasterError::UnsupportedChannels(0);
        assert_eq!(err.to_string(), "unsupported channel count: 0");
    }

    #[test]
    fn test_unsupported_shape_display() {
        let err = RasterError::UnsupportedShape {
            width: 4,
            height: 4,
            depth: 2,
            reason: "volume images cannot convert to RGBA",
        };
        assert_eq!(
            err.to_string(),
            "unsupported image shape 4×4×2: volume images cannot convert to RGBA"
        );
    }
}
