use photomesh_image::ImageSize;

/// An error type for depth sources.
#[derive(thiserror::Error, Debug)]
pub enum DepthError {
    /// Error reading the depth map file.
    #[error("Failed to read the depth map. {0}")]
    Io(#[from] photomesh_io::IoError),

    /// Error building the depth map image.
    #[error("Failed to create the depth map. {0}")]
    Image(#[from] photomesh_image::ImageError),

    /// The depth file format is not supported.
    #[error("Unsupported depth map format: {0}")]
    UnsupportedFormat(std::path::PathBuf),

    /// The depth divisor must be a positive finite number.
    #[error("Depth divisor must be positive and finite, got {0}")]
    InvalidDivisor(f32),

    /// The depth map is not aligned with the image grid.
    #[error("Depth map {depth} is not aligned with image {image}")]
    ShapeMismatch {
        /// Size of the input image.
        image: ImageSize,
        /// Size of the loaded depth map.
        depth: ImageSize,
    },
}
