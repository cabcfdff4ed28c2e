//! Uncompressed pixel-format emission.
//!
//! Not every output format is block-compressed: plain packed-integer
//! formats are emitted one scanline at a time, converting planar floats to
//! unsigned-normalized components and packing them through caller-described
//! channel masks. Rows are padded with zeros up to the configured pitch
//! alignment before each sink write.

use crate::compress::OutputOptions;
use crate::raster::PlanarImage;

/// A packed-integer pixel format described by channel bit masks.
///
/// Masks must be contiguous runs of bits within the pixel's
/// `bits_per_pixel` low bits; a zero mask drops the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    bits_per_pixel: u32,
    rmask: u32,
    gmask: u32,
    bmask: u32,
    amask: u32,
}

impl PixelFormat {
    /// 32-bit BGRA, 8 bits per channel (the little-endian `A8R8G8B8`
    /// layout).
    pub fn bgra8() -> Self {
        Self::from_masks(32, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000)
    }

    /// 16-bit `R5G6B5`, no alpha.
    pub fn rgb565() -> Self {
        Self::from_masks(16, 0xF800, 0x07E0, 0x001F, 0)
    }

    /// A custom masked format.
    ///
    /// # Panics
    ///
    /// Panics if `bits_per_pixel` is zero or above 32.
    pub fn from_masks(bits_per_pixel: u32, rmask: u32, gmask: u32, bmask: u32, amask: u32) -> Self {
        assert!(
            bits_per_pixel >= 1 && bits_per_pixel <= 32,
            "bits per pixel {} outside 1..=32",
            bits_per_pixel
        );
        Self {
            bits_per_pixel,
            rmask,
            gmask,
            bmask,
            amask,
        }
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Shift and width of each channel mask, in RGBA order.
    fn shifts_and_sizes(&self) -> [(u32, u32); 4] {
        [
            mask_shift_size(self.rmask),
            mask_shift_size(self.gmask),
            mask_shift_size(self.bmask),
            mask_shift_size(self.amask),
        ]
    }
}

/// Decompose a contiguous bit mask into (shift, bit count).
fn mask_shift_size(mask: u32) -> (u32, u32) {
    if mask == 0 {
        return (0, 0);
    }
    let shift = mask.trailing_zeros();
    let size = (mask >> shift).trailing_ones();
    (shift, size)
}

/// Widen or narrow an 8-bit component to `to_bits`, replicating high bits
/// when widening so full intensity stays full intensity.
fn convert_component(value: u8, to_bits: u32) -> u32 {
    match to_bits {
        0 => 0,
        bits if bits <= 8 => u32::from(value) >> (8 - bits),
        bits => {
            let mut result = u32::from(value) << (bits - 8);
            let mut filled = bits - 8;
            while filled > 0 {
                let take = filled.min(8);
                result |= (u32::from(value) >> (8 - take)) << (filled - take);
                filled -= take;
            }
            result
        }
    }
}

/// Little-endian bit packer for one scanline.
struct BitWriter<'a> {
    out: &'a mut Vec<u8>,
    acc: u64,
    bits: u32,
}

impl<'a> BitWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, acc: 0, bits: 0 }
    }

    fn put_bits(&mut self, value: u32, count: u32) {
        debug_assert!(count <= 32);
        let masked = if count == 32 {
            u64::from(value)
        } else {
            u64::from(value) & ((1u64 << count) - 1)
        };
        self.acc |= masked << self.bits;
        self.bits += count;
        while self.bits >= 8 {
            self.out.push((self.acc & 0xFF) as u8);
            self.acc >>= 8;
            self.bits -= 8;
        }
    }

    fn flush(&mut self) {
        if self.bits > 0 {
            self.out.push((self.acc & 0xFF) as u8);
            self.acc = 0;
            self.bits = 0;
        }
    }
}

/// Scanline-order emitter for uncompressed packed-pixel output.
///
/// # Example
///
/// ```
/// use blockpress::compress::{OutputOptions, PixelEmitter, PixelFormat};
/// use blockpress::raster::FloatImage;
///
/// let image = FloatImage::allocate(128, 128, 1);
/// let emitter = PixelEmitter::new(PixelFormat::bgra8()).with_pitch_alignment(4);
/// let mut output = OutputOptions::new();
/// emitter.emit(&image.as_planar(), &mut output);
/// ```
#[derive(Debug, Clone)]
pub struct PixelEmitter {
    format: PixelFormat,
    pitch_alignment: usize,
}

impl PixelEmitter {
    pub fn new(format: PixelFormat) -> Self {
        Self {
            format,
            pitch_alignment: 1,
        }
    }

    /// Round each scanline up to a multiple of `alignment` bytes, padding
    /// with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `alignment` is zero.
    pub fn with_pitch_alignment(mut self, alignment: usize) -> Self {
        assert!(alignment >= 1, "pitch alignment must be at least 1");
        self.pitch_alignment = alignment;
        self
    }

    /// Bytes per emitted scanline for an image of the given width.
    pub fn pitch(&self, width: u32) -> usize {
        let bytes = (width as usize * self.format.bits_per_pixel as usize).div_ceil(8);
        bytes.div_ceil(self.pitch_alignment) * self.pitch_alignment
    }

    /// Convert and write `image` one scanline at a time, top to bottom.
    ///
    /// Components clamp to `[0, 1]` and quantize to 8 bits before packing.
    /// A zero-area image emits nothing.
    pub fn emit(&self, image: &PlanarImage<'_>, output: &mut OutputOptions) {
        if image.is_empty() {
            return;
        }

        let pitch = self.pitch(image.width());
        let channels = self.format.shifts_and_sizes();

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            bits_per_pixel = self.format.bits_per_pixel,
            pitch,
            "emitting uncompressed scanlines"
        );

        let mut scanline = Vec::with_capacity(pitch);
        for y in 0..image.height() {
            scanline.clear();
            let mut stream = BitWriter::new(&mut scanline);

            for x in 0..image.width() {
                let mut pixel = 0u32;
                for (c, &(shift, size)) in channels.iter().enumerate() {
                    let value = image.fetch_clamped(c as u32, x, y);
                    let quantized = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
                    pixel |= convert_component(quantized, size) << shift;
                }
                stream.put_bits(pixel, self.format.bits_per_pixel);
            }

            stream.flush();
            debug_assert!(scanline.len() <= pitch);
            scanline.resize(pitch, 0);
            output.write_data(&scanline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::OutputSink;
    use crate::raster::FloatImage;
    use std::sync::{Arc, Mutex};

    struct RecordingSink(Arc<Mutex<Vec<Vec<u8>>>>);

    impl OutputSink for RecordingSink {
        fn write_data(&mut self, data: &[u8]) {
            self.0.lock().unwrap().push(data.to_vec());
        }
    }

    fn emit_rows(emitter: &PixelEmitter, image: &FloatImage) -> Vec<Vec<u8>> {
        let rows = Arc::new(Mutex::new(Vec::new()));
        let mut output = OutputOptions::new().with_sink(RecordingSink(Arc::clone(&rows)));
        emitter.emit(&image.as_planar(), &mut output);
        let result = rows.lock().unwrap().clone();
        result
    }

    #[test]
    fn test_mask_shift_size() {
        assert_eq!(mask_shift_size(0), (0, 0));
        assert_eq!(mask_shift_size(0x00FF_0000), (16, 8));
        assert_eq!(mask_shift_size(0xF800), (11, 5));
        assert_eq!(mask_shift_size(0x07E0), (5, 6));
        assert_eq!(mask_shift_size(0x001F), (0, 5));
    }

    #[test]
    fn test_convert_component() {
        assert_eq!(convert_component(0xFF, 5), 0x1F);
        assert_eq!(convert_component(0xFF, 8), 0xFF);
        assert_eq!(convert_component(0x80, 5), 0x10);
        // Widening replicates: full intensity stays all ones.
        assert_eq!(convert_component(0xFF, 16), 0xFFFF);
        assert_eq!(convert_component(0, 16), 0);
    }

    #[test]
    fn test_bgra8_byte_order() {
        let mut img = FloatImage::allocate(1, 1, 1);
        img.set_pixel(0, 0, 0, 1.0); // r
        img.set_pixel(1, 0, 0, 0.0); // g
        img.set_pixel(2, 0, 0, 0.2); // b
        img.set_pixel(3, 0, 0, 1.0); // a

        let rows = emit_rows(&PixelEmitter::new(PixelFormat::bgra8()), &img);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec![51, 0, 255, 255]); // B, G, R, A
    }

    #[test]
    fn test_rgb565_packing() {
        let mut img = FloatImage::allocate(1, 1, 1);
        img.set_pixel(0, 0, 0, 1.0);

        let rows = emit_rows(&PixelEmitter::new(PixelFormat::rgb565()), &img);
        // Pure red: 0xF800, low byte first.
        assert_eq!(rows[0], vec![0x00, 0xF8]);
    }

    #[test]
    fn test_one_write_per_scanline() {
        let img = FloatImage::allocate(3, 5, 1);
        let rows = emit_rows(&PixelEmitter::new(PixelFormat::bgra8()), &img);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 12));
    }

    #[test]
    fn test_pitch_alignment_pads_with_zeros() {
        let emitter = PixelEmitter::new(PixelFormat::rgb565()).with_pitch_alignment(8);
        assert_eq!(emitter.pitch(3), 8);

        let mut img = FloatImage::allocate(3, 1, 1);
        for x in 0..3 {
            img.set_pixel(0, x, 0, 1.0);
        }

        let rows = emit_rows(&emitter, &img);
        assert_eq!(rows[0].len(), 8);
        assert_eq!(&rows[0][..6], &[0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8]);
        assert_eq!(&rows[0][6..], &[0, 0]);
    }

    #[test]
    fn test_zero_area_emits_nothing() {
        let img = FloatImage::allocate(0, 4, 1);
        let rows = emit_rows(&PixelEmitter::new(PixelFormat::bgra8()), &img);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_alpha_mask_drops_channel() {
        let mut img = FloatImage::allocate(1, 1, 1);
        img.set_pixel(3, 0, 0, 1.0);

        let rows = emit_rows(&PixelEmitter::new(PixelFormat::rgb565()), &img);
        assert_eq!(rows[0], vec![0x00, 0x00]);
    }

    #[test]
    fn test_sub_byte_format_packs_across_pixels() {
        // 4 bits per pixel, single red nibble: two pixels share a byte.
        let format = PixelFormat::from_masks(4, 0xF, 0, 0, 0);
        let mut img = FloatImage::allocate(2, 1, 1);
        img.set_pixel(0, 0, 0, 1.0);
        img.set_pixel(0, 1, 0, 0.0);

        let rows = emit_rows(&PixelEmitter::new(format), &img);
        assert_eq!(rows[0], vec![0x0F]);
    }
}
