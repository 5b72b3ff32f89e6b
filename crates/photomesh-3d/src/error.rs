use photomesh_image::ImageSize;

/// An error type for the 3d reconstruction pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Mesh3dError {
    /// Error when the depth map and image dimensions disagree.
    #[error("Depth map {depth} does not match image {image}")]
    ShapeMismatch {
        /// Size of the input image.
        image: ImageSize,
        /// Size of the depth map.
        depth: ImageSize,
    },

    /// Error when the depth scale is not a positive finite number.
    #[error("Depth scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    /// Error when too few points remain to form a single face.
    #[error("Need at least 3 valid points to build a surface, got {0}")]
    DegenerateInput(usize),

    /// Error when surface reconstruction produced no faces.
    #[error("Surface reconstruction produced no faces from {num_points} points")]
    EmptyMesh {
        /// Number of points handed to the reconstruction algorithm.
        num_points: usize,
    },

    /// Error when a face references a vertex that does not exist.
    #[error("Face index {index} is out of range for {num_vertices} vertices")]
    FaceIndexOutOfRange {
        /// The offending vertex index.
        index: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },

    /// Error when reconstruction did not keep the input points as vertices.
    #[error("Reconstruction returned {num_vertices} vertices for {num_points} input points")]
    VertexCountMismatch {
        /// Number of vertices in the reconstructed mesh.
        num_vertices: usize,
        /// Number of points handed to the reconstruction algorithm.
        num_points: usize,
    },
}
