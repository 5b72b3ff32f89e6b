use std::{fs::File, io::BufReader, path::Path};

use photomesh_image::{Image, ImageSize};
use tiff::decoder::{Decoder, DecodingResult};

use crate::error::IoError;

/// Read a TIFF image with a single 32-bit float channel (mono32f).
///
/// Depth estimation models commonly persist their output as float TIFF, so
/// this is the preferred interchange format for depth maps.
///
/// # Arguments
///
/// * `file_path` - The path to the TIFF file.
///
/// # Returns
///
/// A grayscale image with a single f32 channel.
pub fn read_image_tiff_mono32f(file_path: impl AsRef<Path>) -> Result<Image<f32, 1>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let file = File::open(file_path)?;
    let mut decoder = Decoder::new(BufReader::new(file))?;

    let (width, height) = decoder.dimensions()?;
    let data = match decoder.read_image()? {
        DecodingResult::F32(data) => data,
        _ => return Err(IoError::TiffUnsupportedSampleFormat),
    };

    let size = ImageSize {
        width: width as usize,
        height: height as usize,
    };

    Ok(Image::new(size, data)?)
}
