//! Compression dispatch substrate.
//!
//! This module owns everything between "an image and an encoder" and "bytes
//! at the sink": the strategy traits encoders implement, the option and
//! output-plumbing types, the order-preserving serial/parallel block
//! dispatcher, and the uncompressed scanline emitter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ColorBlock     ┌──────────────────┐
//! │ BlockCompressor │ ────────────────► │   BlockEncoder   │
//! │                 │ ◄──────────────── │  (DXT1/3/5, …)   │
//! └────────┬────────┘   fixed payload   └──────────────────┘
//!          │ row-major bytes
//!          ▼
//! ┌─────────────────┐
//! │   OutputSink    │
//! └─────────────────┘
//! ```
//!
//! The ordering contract is the load-bearing piece: compressed blocks reach
//! the sink in row-major block order whether encoding ran serially or on
//! worker threads. See [`BlockCompressor`] for how the parallel path
//! enforces that structurally.

mod dispatch;
mod encoder;
mod options;
mod output;
mod pixel;

pub use dispatch::{BlockCompressor, TileCompressor, MAX_BLOCK_SIZE};
pub use encoder::{BlockEncoder, TileEncoder};
pub use options::{AlphaMode, CompressionOptions, Quality};
pub use output::{OutputOptions, OutputSink};
pub use pixel::{PixelEmitter, PixelFormat};
