//! 4×4 color blocks: the unit of work handed to block encoders.

use crate::block::BLOCK_DIM;
use crate::raster::PlanarImage;

/// A 4×4 block of RGBA texels extracted from a planar image.
///
/// Texels are interleaved RGBA floats in row-major order. Blocks are
/// ephemeral stack values: extracted, handed to one encode call, then
/// discarded. Blocks on the right and bottom edges of an image replicate the
/// nearest boundary pixels, so every texel holds real image data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBlock {
    texels: [[f32; 4]; 16],
}

impl ColorBlock {
    /// Extract the block whose top-left pixel is `(x, y)`.
    ///
    /// `(x, y)` must lie inside the image; the block may extend past the
    /// right or bottom edge, in which case out-of-bounds texels clamp to the
    /// boundary.
    pub fn from_image(image: &PlanarImage<'_>, x: u32, y: u32) -> Self {
        debug_assert!(x < image.width() && y < image.height());

        let mut texels = [[0.0f32; 4]; 16];
        for by in 0..BLOCK_DIM {
            for bx in 0..BLOCK_DIM {
                let texel = &mut texels[(by * BLOCK_DIM + bx) as usize];
                for (c, component) in texel.iter_mut().enumerate() {
                    *component = image.fetch_clamped(c as u32, x + bx, y + by);
                }
            }
        }
        Self { texels }
    }

    /// The texel at block-local coordinates `(x, y)`, both in `0..4`.
    pub fn texel(&self, x: u32, y: u32) -> [f32; 4] {
        debug_assert!(x < BLOCK_DIM && y < BLOCK_DIM);
        self.texels[(y * BLOCK_DIM + x) as usize]
    }

    /// All 16 texels in row-major order.
    pub fn texels(&self) -> &[[f32; 4]; 16] {
        &self.texels
    }
}
