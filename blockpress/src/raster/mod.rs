//! Planar floating-point raster model.
//!
//! Block compression consumes images as planar float buffers: one plane of
//! `width * height` floats per channel, channels in RGBA order. This module
//! provides the owned storage type ([`FloatImage`]), the borrowed validated
//! view the compressors read from ([`PlanarImage`]), and conversion to and
//! from `image::RgbaImage`.

mod convert;
mod error;
mod image;

pub use error::RasterError;
pub use image::{FloatImage, PlanarImage};
