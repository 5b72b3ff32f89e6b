use std::path::{Path, PathBuf};

use photomesh_image::{DepthMap, Image, Rgb8};
use photomesh_io::png::GrayImage;

use crate::{error::DepthError, estimator::DepthEstimator};

/// A depth source backed by a pre-computed depth map file.
///
/// Supported formats: 8/16-bit grayscale PNG (integer samples are divided
/// by `divisor` on load, e.g. 256.0 for millimeter-packed maps) and 32-bit
/// float TIFF. The loaded map must match the image dimensions exactly.
pub struct DepthMapFile {
    path: PathBuf,
    divisor: f32,
}

impl DepthMapFile {
    /// Create a new file-backed depth source.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the depth map file.
    /// * `divisor` - Divisor applied to every depth sample on load.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisor` is not positive and finite.
    pub fn new(path: impl AsRef<Path>, divisor: f32) -> Result<Self, DepthError> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(DepthError::InvalidDivisor(divisor));
        }
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            divisor,
        })
    }

    fn load(&self) -> Result<DepthMap, DepthError> {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| DepthError::UnsupportedFormat(self.path.clone()))?;

        let depth = match ext.to_str() {
            Some("png") => match photomesh_io::png::read_image_png_mono(&self.path)? {
                GrayImage::L8(img) => self.scale_samples(&img)?,
                GrayImage::L16(img) => self.scale_samples(&img)?,
            },
            Some("tif") | Some("tiff") => {
                let img = photomesh_io::tiff::read_image_tiff_mono32f(&self.path)?;
                self.scale_samples(&img)?
            }
            _ => return Err(DepthError::UnsupportedFormat(self.path.clone())),
        };

        Ok(depth)
    }

    fn scale_samples<T>(&self, img: &Image<T, 1>) -> Result<DepthMap, DepthError>
    where
        T: Copy + Into<f32>,
    {
        let data = img
            .as_slice()
            .iter()
            .map(|&v| v.into() / self.divisor)
            .collect();
        Ok(DepthMap::new(img.size(), data)?)
    }
}

impl DepthEstimator for DepthMapFile {
    fn estimate(&self, image: &Rgb8) -> Result<DepthMap, DepthError> {
        let depth = self.load()?;

        if depth.size() != image.size() {
            return Err(DepthError::ShapeMismatch {
                image: image.size(),
                depth: depth.size(),
            });
        }

        log::debug!(
            "loaded depth map {} from {}",
            depth.size(),
            self.path.display()
        );

        Ok(depth)
    }
}
