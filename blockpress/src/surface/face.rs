//! Shared-ownership image surfaces.

use std::sync::Arc;

use crate::raster::FloatImage;

/// A 2D image surface with shared, reference-counted pixel storage.
///
/// Cloning a surface shares the underlying [`FloatImage`] rather than
/// copying pixels; the storage's reference count is exactly the number of
/// live handles, and the pixels are freed when the last handle drops. A
/// surface can therefore outlive the [`CubeSurface`](crate::surface::CubeSurface)
/// that created it.
///
/// Mutation follows copy-on-write at surface granularity: call [`detach`]
/// (or [`image_mut`], which detaches for you) before writing, so writes
/// never bleed into other handles sharing the storage.
///
/// [`detach`]: Surface::detach
/// [`image_mut`]: Surface::image_mut
#[derive(Debug, Clone, Default)]
pub struct Surface {
    image: Option<Arc<FloatImage>>,
}

impl Surface {
    /// An empty surface with no storage attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface owning freshly provided image storage.
    pub fn from_image(image: FloatImage) -> Self {
        Self {
            image: Some(Arc::new(image)),
        }
    }

    /// True when no storage is attached.
    pub fn is_null(&self) -> bool {
        self.image.is_none()
    }

    /// Image width, or 0 when null.
    pub fn width(&self) -> u32 {
        self.image.as_ref().map_or(0, |i| i.width())
    }

    /// Image height, or 0 when null.
    pub fn height(&self) -> u32 {
        self.image.as_ref().map_or(0, |i| i.height())
    }

    /// Shared read access to the pixel storage.
    pub fn image(&self) -> Option<&FloatImage> {
        self.image.as_deref()
    }

    /// Unique write access to the pixel storage, detaching first if the
    /// storage is shared with other handles.
    pub fn image_mut(&mut self) -> Option<&mut FloatImage> {
        self.image.as_mut().map(Arc::make_mut)
    }

    /// Replace the storage handle with a fresh image, dropping any shared
    /// reference held before.
    pub fn set_image(&mut self, image: FloatImage) {
        self.image = Some(Arc::new(image));
    }

    /// Drop the storage handle entirely, leaving the surface null.
    pub fn clear(&mut self) {
        self.image = None;
    }

    /// Make this handle's storage independently owned, deep-copying the
    /// pixels if any other handle currently shares them.
    pub fn detach(&mut self) {
        if let Some(arc) = self.image.as_mut() {
            if Arc::strong_count(arc) > 1 {
                *arc = Arc::new(FloatImage::clone(arc));
            }
        }
    }

    /// True when both surfaces point at the same storage allocation.
    pub fn shares_storage(&self, other: &Surface) -> bool {
        match (&self.image, &other.image) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Convert gamma-encoded color to linear by raising the color channels
    /// to `gamma`. Detaches shared storage first; a null surface is a no-op.
    pub fn to_linear(&mut self, gamma: f32) {
        if let Some(image) = self.image_mut() {
            image.apply_gamma(gamma);
        }
    }

    /// Convert linear color to gamma-encoded by raising the color channels
    /// to `1 / gamma`. Detaches shared storage first; a null surface is a
    /// no-op.
    pub fn to_gamma(&mut self, gamma: f32) {
        if let Some(image) = self.image_mut() {
            image.apply_gamma(1.0 / gamma);
        }
    }
}
