//! Cube-map surfaces: six square faces with shared-ownership storage.

use crate::raster::FloatImage;
use crate::surface::Surface;

/// Number of faces in a cube map.
pub const FACE_COUNT: usize = 6;

/// A cube-map surface: six square faces of a common edge length.
///
/// A default-constructed cube is null (`edge_length() == 0`, faces
/// unallocated) and must be [`allocate`](CubeSurface::allocate)d before use.
/// Cloning duplicates the edge length and shares each face's pixel storage
/// with the source; callers that intend to mutate a clone independently
/// must reallocate it or detach its faces first. Plain assignment moves the
/// value, so sharing is only ever introduced through an explicit clone.
///
/// # Example
///
/// ```
/// use blockpress::surface::CubeSurface;
///
/// let mut cube = CubeSurface::new();
/// cube.allocate(256);
/// assert_eq!(cube.edge_length(), 256);
/// assert_eq!(cube.count_mipmaps(), 9);
///
/// let shared = cube.clone();
/// assert!(shared.face(0).shares_storage(cube.face(0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CubeSurface {
    size: u32,
    faces: [Surface; FACE_COUNT],
}

impl CubeSurface {
    /// A null cube surface with no allocated faces.
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the cube has been allocated.
    pub fn is_null(&self) -> bool {
        self.size == 0
    }

    /// Edge length shared by all six faces, 0 when null.
    pub fn edge_length(&self) -> u32 {
        self.size
    }

    /// Number of mipmap levels a full chain down to 1×1 would have.
    pub fn count_mipmaps(&self) -> u32 {
        if self.size == 0 {
            0
        } else {
            self.size.ilog2() + 1
        }
    }

    /// Give every face a fresh, zero-initialized `size × size × 1` image.
    ///
    /// Each face drops whatever storage handle it held, so faces shared
    /// with other cubes are left untouched there and this cube ends up with
    /// six independent, non-aliased images. Calling again reallocates and
    /// discards prior contents.
    pub fn allocate(&mut self, size: u32) {
        self.size = size;
        for face in &mut self.faces {
            face.set_image(FloatImage::allocate(size, size, 1));
        }
    }

    /// The face at index `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f >= 6`.
    pub fn face(&self, f: usize) -> &Surface {
        assert!(f < FACE_COUNT, "face index {} out of range", f);
        &self.faces[f]
    }

    /// Mutable access to the face at index `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f >= 6`.
    pub fn face_mut(&mut self, f: usize) -> &mut Surface {
        assert!(f < FACE_COUNT, "face index {} out of range", f);
        &mut self.faces[f]
    }

    /// Convert all faces from gamma-encoded to linear color. Shared face
    /// storage detaches before mutation; a null cube is a no-op.
    pub fn to_linear(&mut self, gamma: f32) {
        if self.is_null() {
            return;
        }
        for face in &mut self.faces {
            face.to_linear(gamma);
        }
    }

    /// Convert all faces from linear to gamma-encoded color. Shared face
    /// storage detaches before mutation; a null cube is a no-op.
    pub fn to_gamma(&mut self, gamma: f32) {
        if self.is_null() {
            return;
        }
        for face in &mut self.faces {
            face.to_gamma(gamma);
        }
    }
}
