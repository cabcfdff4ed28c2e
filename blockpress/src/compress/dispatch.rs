//! Block-compression dispatch.
//!
//! The dispatchers walk the block grid of an image, hand each block to an
//! encoder strategy, and stream the fixed-size payloads to the output sink
//! in row-major block order. That ordering contract holds on both execution
//! paths:
//!
//! - The serial path encodes and emits blocks in scan order, so emission
//!   order equals computation order.
//! - The parallel path gives every worker a disjoint slice of one result
//!   buffer, addressed by the block's row-major index. Workers may finish in
//!   any order; the byte layout is fixed by address, and a single write
//!   after the join emits the buffer already in scan order.

use rayon::prelude::*;

use crate::block::{BlockGrid, ColorBlock, Tile};
use crate::compress::{AlphaMode, BlockEncoder, CompressionOptions, OutputOptions, TileEncoder};
use crate::raster::PlanarImage;

/// Largest supported encoded-block size, in bytes.
///
/// All block-compressed formats in scope emit at most 16 bytes per 4×4
/// block; the serial path encodes into a stack buffer of this size.
pub const MAX_BLOCK_SIZE: usize = 16;

/// Grids smaller than this run single-threaded: for a handful of blocks the
/// thread-pool setup costs more than it saves.
const PARALLEL_THRESHOLD: usize = 16;

/// Order-preserving dispatcher over a [`BlockEncoder`].
///
/// # Example
///
/// ```
/// use blockpress::block::ColorBlock;
/// use blockpress::compress::{
///     AlphaMode, BlockCompressor, BlockEncoder, CompressionOptions, OutputOptions,
/// };
/// use blockpress::raster::FloatImage;
///
/// struct LuminanceEncoder;
///
/// impl BlockEncoder for LuminanceEncoder {
///     fn block_size(&self) -> usize {
///         1
///     }
///
///     fn encode_block(
///         &self,
///         block: &ColorBlock,
///         _alpha_mode: AlphaMode,
///         _options: &CompressionOptions,
///         output: &mut [u8],
///     ) {
///         let sum: f32 = block.texels().iter().map(|t| t[0] + t[1] + t[2]).sum();
///         output[0] = (sum / 48.0 * 255.0).clamp(0.0, 255.0) as u8;
///     }
/// }
///
/// let image = FloatImage::allocate(64, 64, 1);
/// let compressor = BlockCompressor::new(LuminanceEncoder);
/// let mut output = OutputOptions::new();
/// compressor.compress(
///     AlphaMode::None,
///     &image.as_planar(),
///     &CompressionOptions::new(),
///     &mut output,
/// );
/// ```
#[derive(Debug)]
pub struct BlockCompressor<E> {
    encoder: E,
}

impl<E: BlockEncoder> BlockCompressor<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn into_inner(self) -> E {
        self.encoder
    }

    /// Compress every block of `image` and stream the payloads to the sink
    /// in row-major block order.
    ///
    /// A zero-area image is a no-op: no encoder calls, no output. Without a
    /// configured sink, blocks are still encoded and the bytes discarded.
    ///
    /// # Panics
    ///
    /// Panics if the encoder reports a block size of zero or above
    /// [`MAX_BLOCK_SIZE`].
    pub fn compress(
        &self,
        alpha_mode: AlphaMode,
        image: &PlanarImage<'_>,
        compression: &CompressionOptions,
        output: &mut OutputOptions,
    ) {
        let bs = self.encoder.block_size();
        assert!(
            bs > 0 && bs <= MAX_BLOCK_SIZE,
            "encoder block size {} outside 1..={}",
            bs,
            MAX_BLOCK_SIZE
        );

        let grid = BlockGrid::for_image(image.width(), image.height());
        if grid.is_empty() {
            return;
        }

        let single_threaded = !compression.parallel || grid.len() < PARALLEL_THRESHOLD;
        if single_threaded {
            self.compress_serial(alpha_mode, image, compression, output, grid, bs);
        } else {
            self.compress_parallel(alpha_mode, image, compression, output, grid, bs);
        }
    }

    fn compress_serial(
        &self,
        alpha_mode: AlphaMode,
        image: &PlanarImage<'_>,
        compression: &CompressionOptions,
        output: &mut OutputOptions,
        grid: BlockGrid,
        bs: usize,
    ) {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            blocks = grid.len(),
            block_size = bs,
            "compressing blocks serially"
        );

        let mut mem = [0u8; MAX_BLOCK_SIZE];
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let (x, y) = grid.origin(col, row);
                let block = ColorBlock::from_image(image, x, y);
                self.encoder
                    .encode_block(&block, alpha_mode, compression, &mut mem[..bs]);
                output.write_data(&mem[..bs]);
            }
        }
    }

    fn compress_parallel(
        &self,
        alpha_mode: AlphaMode,
        image: &PlanarImage<'_>,
        compression: &CompressionOptions,
        output: &mut OutputOptions,
        grid: BlockGrid,
        bs: usize,
    ) {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            blocks = grid.len(),
            block_size = bs,
            "compressing blocks in parallel"
        );

        // Chunk i is the byte range [(row*cols + col) * bs, ..+bs) for the
        // block at cell(i), so workers write disjoint slices and the buffer
        // ends up in row-major order no matter when each block finishes.
        let mut buffer = vec![0u8; bs * grid.len()];
        buffer
            .par_chunks_exact_mut(bs)
            .enumerate()
            .for_each(|(i, chunk)| {
                let (col, row) = grid.cell(i);
                let (x, y) = grid.origin(col, row);
                let block = ColorBlock::from_image(image, x, y);
                self.encoder
                    .encode_block(&block, alpha_mode, compression, chunk);
            });

        output.write_data(&buffer);
    }
}

/// Single-threaded dispatcher over a [`TileEncoder`].
///
/// Follows the same grid and row-major emission contract as
/// [`BlockCompressor`]. Tile codecs are slow enough per block that worker
/// dispatch has not been worth wiring up; parallelism is an optimization
/// here, not part of the ordering contract.
#[derive(Debug)]
pub struct TileCompressor<E> {
    encoder: E,
}

impl<E: TileEncoder> TileCompressor<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn into_inner(self) -> E {
        self.encoder
    }

    /// Compress every tile of `image` and stream the payloads to the sink
    /// in row-major block order.
    ///
    /// # Panics
    ///
    /// Panics if the encoder reports a block size of zero or above
    /// [`MAX_BLOCK_SIZE`].
    pub fn compress(
        &self,
        alpha_mode: AlphaMode,
        image: &PlanarImage<'_>,
        compression: &CompressionOptions,
        output: &mut OutputOptions,
    ) {
        let bs = self.encoder.block_size();
        assert!(
            bs > 0 && bs <= MAX_BLOCK_SIZE,
            "encoder block size {} outside 1..={}",
            bs,
            MAX_BLOCK_SIZE
        );

        let grid = BlockGrid::for_image(image.width(), image.height());
        if grid.is_empty() {
            return;
        }

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            blocks = grid.len(),
            block_size = bs,
            "compressing tiles serially"
        );

        let mut mem = [0u8; MAX_BLOCK_SIZE];
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let (x, y) = grid.origin(col, row);
                let tile = Tile::from_image(image, x, y);
                self.encoder
                    .encode_tile(&tile, alpha_mode, compression, &mut mem[..bs]);
                output.write_data(&mem[..bs]);
            }
        }
    }
}
