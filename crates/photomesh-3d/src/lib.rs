#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::Mesh3dError;

/// I/O utilities for writing and reading mesh files.
pub mod io;

mod mesh;
pub use mesh::TriangleMesh;

mod pointcloud;
pub use pointcloud::PointCloud;

mod projector;
pub use projector::project_depth;

mod surface;
pub use surface::{build_surface, SurfaceReconstructor};

mod delaunay;
pub use delaunay::DelaunayXY;
