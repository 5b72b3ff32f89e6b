use std::path::Path;

use photomesh_image::{Image, ImageSize, Rgb8};

use crate::error::IoError;

/// Reads an image from the given file path as RGB8.
///
/// The method tries to read from any image format supported by the image
/// crate; non-RGB inputs (grayscale, RGBA) are converted to RGB.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB8 image containing the decoded pixel data.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Rgb8, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::open(file_path)?.to_rgb8();
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_raw())?)
}
