//! Planar tiles: the block shape consumed by high-bit-depth encoders.

use crate::block::BLOCK_DIM;
use crate::raster::PlanarImage;

/// A 4×4 tile with channel-planar storage.
///
/// Unlike [`ColorBlock`](crate::block::ColorBlock), which interleaves RGBA
/// per texel, a `Tile` keeps one 4×4 plane per channel and records the
/// extent of the source region it actually covers. Encoders for partial edge
/// tiles can weight only the `width() × height()` live texels; the texels
/// beyond the live extent hold clamped boundary replicas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    width: u32,
    height: u32,
    // data[channel][y][x]
    data: [[[f32; 4]; 4]; 4],
}

impl Tile {
    /// Extract the tile whose top-left pixel is `(x, y)`.
    ///
    /// `(x, y)` must lie inside the image. Out-of-bounds texels clamp to the
    /// boundary, exactly as color-block extraction does.
    pub fn from_image(image: &PlanarImage<'_>, x: u32, y: u32) -> Self {
        debug_assert!(x < image.width() && y < image.height());

        let width = (image.width() - x).min(BLOCK_DIM);
        let height = (image.height() - y).min(BLOCK_DIM);

        let mut data = [[[0.0f32; 4]; 4]; 4];
        for (c, plane) in data.iter_mut().enumerate() {
            for (ty, row) in plane.iter_mut().enumerate() {
                for (tx, texel) in row.iter_mut().enumerate() {
                    *texel = image.fetch_clamped(c as u32, x + tx as u32, y + ty as u32);
                }
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Number of live texel columns (1..=4; less than 4 on right-edge tiles).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of live texel rows (1..=4; less than 4 on bottom-edge tiles).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Component `c` of the texel at tile-local `(x, y)`.
    pub fn texel(&self, c: u32, x: u32, y: u32) -> f32 {
        debug_assert!(c < 4 && x < BLOCK_DIM && y < BLOCK_DIM);
        self.data[c as usize][y as usize][x as usize]
    }

    /// The 4×4 plane for channel `c`.
    pub fn plane(&self, c: u32) -> &[[f32; 4]; 4] {
        debug_assert!(c < 4);
        &self.data[c as usize]
    }
}
