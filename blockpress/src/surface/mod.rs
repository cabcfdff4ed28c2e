//! Surface ownership model.
//!
//! [`Surface`] is a shared handle to float image storage with explicit
//! copy-on-write: clones share pixels until one side detaches. A
//! [`CubeSurface`] bundles six square faces behind that model, so copying a
//! cube is cheap and face storage is only duplicated when actually written.

mod cube;
mod face;

pub use cube::{CubeSurface, FACE_COUNT};
pub use face::Surface;
