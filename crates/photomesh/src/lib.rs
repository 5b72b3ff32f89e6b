#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use photomesh_image as image;

#[doc(inline)]
pub use photomesh_io as io;

#[doc(inline)]
pub use photomesh_depth as depth;

#[doc(inline)]
pub use photomesh_3d as k3d;
