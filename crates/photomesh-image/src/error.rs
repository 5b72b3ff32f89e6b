/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a pixel coordinate is outside the image grid.
    #[error("Pixel coordinate ({0}, {1}) is out of bounds for image {2}x{3}")]
    PixelOutOfBounds(usize, usize, usize, usize),
}
