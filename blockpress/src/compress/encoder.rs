//! Encoder strategy traits.
//!
//! The dispatchers are polymorphic over anything that can turn one block of
//! pixels into a fixed-size payload. Two shapes exist: [`BlockEncoder`]
//! consumes interleaved [`ColorBlock`]s and may run on worker threads;
//! [`TileEncoder`] consumes channel-planar [`Tile`]s and is driven
//! single-threaded.
//!
//! # Example
//!
//! ```
//! use blockpress::block::ColorBlock;
//! use blockpress::compress::{AlphaMode, BlockEncoder, CompressionOptions};
//!
//! /// Encodes each block as the quantized color of its first texel.
//! struct FirstTexelEncoder;
//!
//! impl BlockEncoder for FirstTexelEncoder {
//!     fn block_size(&self) -> usize {
//!         4
//!     }
//!
//!     fn encode_block(
//!         &self,
//!         block: &ColorBlock,
//!         _alpha_mode: AlphaMode,
//!         _options: &CompressionOptions,
//!         output: &mut [u8],
//!     ) {
//!         for (byte, component) in output.iter_mut().zip(block.texel(0, 0)) {
//!             *byte = (component.clamp(0.0, 1.0) * 255.0) as u8;
//!         }
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::block::{ColorBlock, Tile};
use crate::compress::{AlphaMode, CompressionOptions};

/// Compresses one [`ColorBlock`] into a fixed-size payload.
///
/// Implementations must be pure functions of their inputs: deterministic,
/// no hidden state, always succeeding on well-formed blocks. The payload
/// size is fixed per encoder and must not exceed
/// [`MAX_BLOCK_SIZE`](crate::compress::MAX_BLOCK_SIZE). `Send + Sync` is
/// required so the dispatcher can share the encoder across worker threads.
pub trait BlockEncoder: Send + Sync {
    /// Size in bytes of every encoded block.
    fn block_size(&self) -> usize;

    /// Encode `block` into `output`, which is exactly `block_size()` bytes.
    fn encode_block(
        &self,
        block: &ColorBlock,
        alpha_mode: AlphaMode,
        options: &CompressionOptions,
        output: &mut [u8],
    );
}

/// Compresses one channel-planar [`Tile`] into a fixed-size payload.
///
/// The tile shape serves high-bit-depth codecs whose working layout differs
/// from the interleaved color block. Tile encoders are only driven from a
/// single thread, so no `Send + Sync` bound is imposed.
pub trait TileEncoder {
    /// Size in bytes of every encoded block.
    fn block_size(&self) -> usize;

    /// Encode `tile` into `output`, which is exactly `block_size()` bytes.
    fn encode_tile(
        &self,
        tile: &Tile,
        alpha_mode: AlphaMode,
        options: &CompressionOptions,
        output: &mut [u8],
    );
}

/// Shared encoders delegate to the inner implementation, so an
/// `Arc<SomeEncoder>` plugs into the dispatcher without unwrapping.
impl<T: BlockEncoder + ?Sized> BlockEncoder for Arc<T> {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encode_block(
        &self,
        block: &ColorBlock,
        alpha_mode: AlphaMode,
        options: &CompressionOptions,
        output: &mut [u8],
    ) {
        (**self).encode_block(block, alpha_mode, options, output)
    }
}
