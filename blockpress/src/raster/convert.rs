//! Conversion between `image::RgbaImage` and the planar float model.

use image::RgbaImage;

use crate::raster::{FloatImage, RasterError};

impl FloatImage {
    /// Convert an 8-bit RGBA image into a planar 4-channel float image.
    ///
    /// Components are normalized to `[0, 1]`.
    pub fn from_rgba(image: &RgbaImage) -> FloatImage {
        let (width, height) = image.dimensions();
        let mut out = FloatImage::allocate(width, height, 1);

        for y in 0..height {
            for x in 0..width {
                let p = image.get_pixel(x, y);
                for c in 0..4 {
                    out.set_pixel(c, x, y, f32::from(p[c as usize]) / 255.0);
                }
            }
        }

        out
    }

    /// Convert back to an 8-bit RGBA image, clamping components to `[0, 1]`.
    ///
    /// Images with fewer than four channels convert with the usual fetch
    /// rules: color replicates channel 0, alpha reads opaque.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::UnsupportedShape`] for volume images
    /// (`depth > 1`).
    pub fn to_rgba(&self) -> Result<RgbaImage, RasterError> {
        if self.depth() > 1 {
            return Err(RasterError::UnsupportedShape {
                width: self.width(),
                height: self.height(),
                depth: self.depth(),
                reason: "volume images cannot convert to RGBA",
            });
        }

        let view = self.as_planar();
        let mut out = RgbaImage::new(self.width(), self.height());

        for y in 0..self.height() {
            for x in 0..self.width() {
                let mut p = [0u8; 4];
                for (c, component) in p.iter_mut().enumerate() {
                    let value = view.fetch_clamped(c as u32, x, y);
                    *component = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
                }
                out.put_pixel(x, y, image::Rgba(p));
            }
        }

        Ok(out)
    }
}
