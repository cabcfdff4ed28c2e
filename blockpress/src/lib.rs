//! BlockPress - block-compression core for texture encoding.
//!
//! This library provides the dispatch and ownership substrate that concrete
//! texture codecs build on: partitioning raster images into 4×4 tiles,
//! driving a pluggable per-tile encoder serially or across worker threads
//! while keeping the output in row-major tile order, and managing cube-map
//! surfaces whose six faces share reference-counted, copy-on-write pixel
//! storage.
//!
//! # Compressing an image
//!
//! ```
//! use blockpress::block::ColorBlock;
//! use blockpress::compress::{
//!     AlphaMode, BlockCompressor, BlockEncoder, CompressionOptions, OutputOptions,
//! };
//! use blockpress::raster::FloatImage;
//!
//! /// A stand-in for a real codec: one byte per block.
//! struct MeanRedEncoder;
//!
//! impl BlockEncoder for MeanRedEncoder {
//!     fn block_size(&self) -> usize {
//!         1
//!     }
//!
//!     fn encode_block(
//!         &self,
//!         block: &ColorBlock,
//!         _alpha_mode: AlphaMode,
//!         _options: &CompressionOptions,
//!         output: &mut [u8],
//!     ) {
//!         let mean: f32 = block.texels().iter().map(|t| t[0]).sum::<f32>() / 16.0;
//!         output[0] = (mean.clamp(0.0, 1.0) * 255.0) as u8;
//!     }
//! }
//!
//! let image = FloatImage::allocate(64, 64, 1);
//! let compressor = BlockCompressor::new(MeanRedEncoder);
//! let mut output = OutputOptions::new();
//! compressor.compress(
//!     AlphaMode::None,
//!     &image.as_planar(),
//!     &CompressionOptions::new(),
//!     &mut output,
//! );
//! ```
//!
//! # Cube surfaces
//!
//! ```
//! use blockpress::surface::CubeSurface;
//!
//! let mut cube = CubeSurface::new();
//! cube.allocate(128);
//!
//! // Clones share face storage until a writer detaches.
//! let mut copy = cube.clone();
//! assert!(copy.face(0).shares_storage(cube.face(0)));
//! copy.face_mut(0).detach();
//! assert!(!copy.face(0).shares_storage(cube.face(0)));
//! ```

pub mod block;
pub mod compress;
pub mod raster;
pub mod surface;

pub use block::{BlockGrid, ColorBlock, Tile, BLOCK_DIM};
pub use compress::{
    AlphaMode, BlockCompressor, BlockEncoder, CompressionOptions, OutputOptions, OutputSink,
    Quality, TileCompressor, TileEncoder,
};
pub use raster::{FloatImage, PlanarImage, RasterError};
pub use surface::{CubeSurface, Surface};

/// Version of the BlockPress library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
