//! Compression configuration.

/// How the alpha channel participates in encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaMode {
    /// Alpha is ignored.
    #[default]
    None,
    /// Alpha carries binary or smooth transparency.
    Transparency,
    /// Color is premultiplied by alpha.
    Premultiplied,
    /// Color error is weighted by alpha during endpoint selection.
    Weighted,
}

/// Encoder effort level.
///
/// Carried through to encoders unchanged; the dispatcher does not interpret
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    /// Cheapest settings an encoder offers; preview quality.
    Fastest,
    /// Balanced speed and quality.
    #[default]
    Normal,
    /// Shipping-asset quality; slower searches allowed.
    Production,
    /// Exhaustive search, regardless of cost.
    Highest,
}

/// Options passed through to block encoders.
///
/// The dispatcher reads only [`parallel`](CompressionOptions::parallel); the
/// remaining fields are opaque knobs for the encoder strategy.
///
/// # Example
///
/// ```
/// use blockpress::compress::{CompressionOptions, Quality};
///
/// let options = CompressionOptions::new()
///     .with_quality(Quality::Production)
///     .with_color_weights([0.3, 0.6, 0.1, 1.0]);
/// assert!(options.parallel);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionOptions {
    /// Encoder effort level.
    pub quality: Quality,
    /// Per-channel error weights for encoders that support them.
    pub color_weights: [f32; 4],
    /// Whether the dispatcher may compress blocks on worker threads.
    ///
    /// Serial execution is still chosen for images below the internal block
    /// threshold, where thread setup costs more than it saves.
    pub parallel: bool,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            color_weights: [1.0; 4],
            parallel: true,
        }
    }
}

impl CompressionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_color_weights(mut self, weights: [f32; 4]) -> Self {
        self.color_weights = weights;
        self
    }

    /// Allow or forbid worker-thread execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
