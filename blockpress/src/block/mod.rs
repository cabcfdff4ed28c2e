//! Tile-grid partitioning and block extraction.
//!
//! An image is compressed as a grid of fixed 4×4 pixel blocks. This module
//! computes that grid ([`BlockGrid`]) and extracts the two block shapes the
//! compressors feed to encoders: [`ColorBlock`] (interleaved RGBA texels)
//! and [`Tile`] (channel-planar layout with partial-extent tracking).

mod color;
mod grid;
mod tile;

pub use color::ColorBlock;
pub use grid::{BlockGrid, BLOCK_DIM};
pub use tile::Tile;
