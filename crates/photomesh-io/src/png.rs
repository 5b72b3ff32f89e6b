use std::{fs::File, path::Path};

use photomesh_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Decoder};

use crate::error::IoError;

/// A grayscale image of either supported PNG bit depth.
pub enum GrayImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 16-bit grayscale image
    L16(Image<u16, 1>),
}

/// Read a PNG image with a single channel (mono8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
pub fn read_image_png_mono8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    match read_image_png_mono(file_path)? {
        GrayImage::L8(image) => Ok(image),
        GrayImage::L16(_) => Err(IoError::PngDecodeError(
            "expected 8-bit grayscale, got 16-bit".to_string(),
        )),
    }
}

/// Read a PNG image with a single channel (mono16).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono16).
pub fn read_image_png_mono16(file_path: impl AsRef<Path>) -> Result<Image<u16, 1>, IoError> {
    match read_image_png_mono(file_path)? {
        GrayImage::L16(image) => Ok(image),
        GrayImage::L8(_) => Err(IoError::PngDecodeError(
            "expected 16-bit grayscale, got 8-bit".to_string(),
        )),
    }
}

/// Read a grayscale PNG image, detecting the bit depth from the header.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// The grayscale image wrapped in [`GrayImage`] according to its bit depth.
pub fn read_image_png_mono(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let (buf, size, bit_depth, color_type) = read_png_impl(file_path)?;

    if color_type != ColorType::Grayscale {
        return Err(IoError::PngDecodeError(format!(
            "expected a grayscale png, got {color_type:?}"
        )));
    }

    match bit_depth {
        BitDepth::Eight => Ok(GrayImage::L8(Image::new(size, buf)?)),
        BitDepth::Sixteen => Ok(GrayImage::L16(Image::new(size, convert_buf_u8_u16(buf))?)),
        _ => Err(IoError::PngDecodeError(format!(
            "unsupported png bit depth {bit_depth:?}"
        ))),
    }
}

// utility to decode a png file into a raw buffer along with its metadata
fn read_png_impl(
    file_path: impl AsRef<Path>,
) -> Result<(Vec<u8>, ImageSize, BitDepth, ColorType), IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let file = File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    Ok((buf, size, info.bit_depth, info.color_type))
}

// png stores 16-bit samples big-endian
fn convert_buf_u8_u16(buf: Vec<u8>) -> Vec<u16> {
    buf.chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_big_endian_pairs() {
        let buf = vec![0x01, 0x00, 0x00, 0xff];
        assert_eq!(convert_buf_u8_u16(buf), vec![256, 255]);
    }

    #[test]
    fn read_png_mono16() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let file_path = tmp.path().join("depth.png");

        let buf =
            image::ImageBuffer::<image::Luma<u16>, Vec<u16>>::from_raw(2, 2, vec![0, 1, 256, 65535])
                .ok_or("failed to build test image")?;
        buf.save(&file_path)?;

        let depth = read_image_png_mono16(&file_path)?;
        assert_eq!(depth.size().width, 2);
        assert_eq!(depth.size().height, 2);
        assert_eq!(depth.as_slice(), &[0, 1, 256, 65535]);

        Ok(())
    }

    #[test]
    fn read_png_mono8_wrong_depth() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let file_path = tmp.path().join("depth.png");

        let buf =
            image::ImageBuffer::<image::Luma<u16>, Vec<u16>>::from_raw(1, 1, vec![512])
                .ok_or("failed to build test image")?;
        buf.save(&file_path)?;

        assert!(read_image_png_mono8(&file_path).is_err());

        Ok(())
    }
}
