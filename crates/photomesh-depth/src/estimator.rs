use photomesh_image::{DepthMap, Rgb8};

use crate::error::DepthError;

/// A source of per-pixel depth estimates for an image.
///
/// Monocular depth models, RGB-D sensors and pre-computed depth files all
/// sit behind this trait so the reconstruction pipeline does not depend on
/// where the depth comes from. Implementations may block for a long time
/// (model inference); callers must propagate a failure rather than
/// substitute a default depth map.
pub trait DepthEstimator {
    /// Estimate a depth map aligned 1:1 with the image's pixel grid.
    ///
    /// # Arguments
    ///
    /// * `image` - The source photograph.
    ///
    /// # Returns
    ///
    /// A depth map with the same width and height as `image`.
    fn estimate(&self, image: &Rgb8) -> Result<DepthMap, DepthError>;
}
