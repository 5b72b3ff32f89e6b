use rayon::prelude::*;

use photomesh_image::{DepthMap, Rgb8};

use crate::{error::Mesh3dError, pointcloud::PointCloud};

/// Project a depth map and its aligned image into a colored point cloud.
///
/// For the pixel at column `i`, row `j` with depth `d = depth[j][i] * scale`
/// the emitted position is `(x, -y, -d)` with
///
/// * `x = (i - width / 2) * d / width`
/// * `y = (j - height / 2) * d / height`
///
/// This is a simplified pinhole-style projection whose implicit focal
/// length is tied to the image dimensions; no calibrated camera model is
/// involved and the result is deliberately approximate. The reflection of
/// the y and z axes orients the surface to face the conventional viewer
/// axis.
///
/// Points are emitted in raster scan order (row-major), one per pixel, so
/// index `j * width + i` pairs the point with its source pixel. The color
/// of each point is the pixel RGB scaled to [0, 1]. A depth sample of zero
/// projects to the finite point (0, 0, 0) and is therefore not removed by
/// [`PointCloud::filter_finite`]; callers that want zero depth discarded
/// should mask those samples to NaN beforehand.
///
/// Rows are processed in parallel; the output order is unaffected.
///
/// # Arguments
///
/// * `depth` - The depth map, same dimensions as `image`.
/// * `image` - The source RGB image.
/// * `scale` - Positive depth multiplier.
///
/// # Errors
///
/// Returns [`Mesh3dError::ShapeMismatch`] before producing any point if
/// the depth map and image dimensions disagree, and
/// [`Mesh3dError::InvalidScale`] if `scale` is not positive and finite.
///
/// # Example
///
/// ```
/// use photomesh_3d::project_depth;
/// use photomesh_image::{DepthMap, ImageSize, Rgb8};
///
/// let size = ImageSize { width: 2, height: 2 };
/// let depth = DepthMap::from_size_val(size, 1.0).unwrap();
/// let image = Rgb8::from_size_val(size, 255).unwrap();
///
/// let cloud = project_depth(&depth, &image, 1.0).unwrap();
/// assert_eq!(cloud.len(), 4);
/// ```
pub fn project_depth(depth: &DepthMap, image: &Rgb8, scale: f64) -> Result<PointCloud, Mesh3dError> {
    if depth.size() != image.size() {
        return Err(Mesh3dError::ShapeMismatch {
            image: image.size(),
            depth: depth.size(),
        });
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Mesh3dError::InvalidScale(scale));
    }

    let width = image.cols();
    let height = image.rows();
    if width == 0 || height == 0 {
        return Ok(PointCloud::new(Vec::new(), Vec::new()));
    }

    let (w, h) = (width as f64, height as f64);

    let mut points = vec![[0.0f64; 3]; width * height];
    let mut colors = vec![[0.0f64; 3]; width * height];

    points
        .par_chunks_exact_mut(width)
        .zip(colors.par_chunks_exact_mut(width))
        .zip(depth.as_slice().par_chunks_exact(width))
        .zip(image.as_slice().par_chunks_exact(width * 3))
        .enumerate()
        .for_each(|(j, (((point_row, color_row), depth_row), pixel_row))| {
            for i in 0..width {
                let d = depth_row[i] as f64 * scale;
                let x = (i as f64 - w / 2.0) * d / w;
                let y = (j as f64 - h / 2.0) * d / h;
                point_row[i] = [x, -y, -d];

                let pixel = &pixel_row[i * 3..i * 3 + 3];
                color_row[i] = [
                    pixel[0] as f64 / 255.0,
                    pixel[1] as f64 / 255.0,
                    pixel[2] as f64 / 255.0,
                ];
            }
        });

    Ok(PointCloud::new(points, colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use photomesh_image::ImageSize;

    fn solid_image(size: ImageSize, rgb: [u8; 3]) -> Rgb8 {
        let mut data = Vec::with_capacity(size.width * size.height * 3);
        for _ in 0..size.width * size.height {
            data.extend_from_slice(&rgb);
        }
        Rgb8::new(size, data).expect("valid image")
    }

    #[test]
    fn uniform_depth_fixes_z() -> Result<(), Mesh3dError> {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let depth = DepthMap::from_size_val(size, 2.0).expect("valid depth");
        let image = solid_image(size, [10, 20, 30]);

        for scale in [0.5, 1.0, 3.0] {
            let cloud = project_depth(&depth, &image, scale)?;
            assert_eq!(cloud.len(), 12);
            for point in cloud.points() {
                assert_relative_eq!(point[2], -2.0 * scale);
            }
        }

        Ok(())
    }

    #[test]
    fn red_square_scenario() -> Result<(), Mesh3dError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let depth = DepthMap::from_size_val(size, 1.0).expect("valid depth");
        let image = solid_image(size, [255, 0, 0]);

        let cloud = project_depth(&depth, &image, 1.0)?;
        assert_eq!(cloud.len(), 4);
        for point in cloud.points() {
            assert!(point.iter().all(|v| v.is_finite()));
        }
        for color in cloud.colors() {
            assert_eq!(*color, [1.0, 0.0, 0.0]);
        }
        assert_eq!(cloud.filter_finite().len(), 4);

        Ok(())
    }

    #[test]
    fn raster_order_and_formula() -> Result<(), Mesh3dError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let depth = DepthMap::from_size_val(size, 1.0).expect("valid depth");
        let image = solid_image(size, [0, 0, 0]);

        let cloud = project_depth(&depth, &image, 1.0)?;

        // pixel (i=1, j=0): x = (1 - 1) / 2 = 0, y = (0 - 1) / 2 = -0.5
        assert_relative_eq!(cloud.points()[1][0], 0.0);
        assert_relative_eq!(cloud.points()[1][1], 0.5);
        assert_relative_eq!(cloud.points()[1][2], -1.0);

        // pixel (i=0, j=1): x = (0 - 1) / 2 = -0.5, y = (1 - 1) / 2 = 0
        assert_relative_eq!(cloud.points()[2][0], -0.5);
        assert_relative_eq!(cloud.points()[2][1], 0.0);

        Ok(())
    }

    #[test]
    fn color_correspondence_per_pixel() -> Result<(), Mesh3dError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let depth = DepthMap::from_size_val(size, 1.0).expect("valid depth");
        let image = Rgb8::new(size, vec![255, 0, 0, 0, 255, 0]).expect("valid image");

        let cloud = project_depth(&depth, &image, 1.0)?;
        assert_eq!(cloud.colors()[0], [1.0, 0.0, 0.0]);
        assert_eq!(cloud.colors()[1], [0.0, 1.0, 0.0]);

        Ok(())
    }

    #[test]
    fn nan_depth_propagates_to_point() -> Result<(), Mesh3dError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let depth = DepthMap::new(size, vec![1.0, f32::NAN, 1.0, 1.0]).expect("valid depth");
        let image = solid_image(size, [255, 255, 255]);

        let cloud = project_depth(&depth, &image, 1.0)?;
        assert_eq!(cloud.len(), 4);
        assert!(cloud.points()[1][2].is_nan());
        assert_eq!(cloud.filter_finite().len(), 3);

        Ok(())
    }

    #[test]
    fn zero_depth_stays_finite() -> Result<(), Mesh3dError> {
        let size = ImageSize {
            width: 1,
            height: 1,
        };
        let depth = DepthMap::from_size_val(size, 0.0).expect("valid depth");
        let image = solid_image(size, [1, 2, 3]);

        let cloud = project_depth(&depth, &image, 1.0)?;
        assert_eq!(cloud.points()[0], [0.0, 0.0, -0.0]);
        assert_eq!(cloud.filter_finite().len(), 1);

        Ok(())
    }

    #[test]
    fn shape_mismatch_rejected() {
        let depth = DepthMap::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            1.0,
        )
        .expect("valid depth");
        let image = solid_image(
            ImageSize {
                width: 3,
                height: 2,
            },
            [0, 0, 0],
        );

        let result = project_depth(&depth, &image, 1.0);
        assert!(matches!(result, Err(Mesh3dError::ShapeMismatch { .. })));
    }

    #[test]
    fn invalid_scale_rejected() {
        let size = ImageSize {
            width: 1,
            height: 1,
        };
        let depth = DepthMap::from_size_val(size, 1.0).expect("valid depth");
        let image = solid_image(size, [0, 0, 0]);

        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = project_depth(&depth, &image, scale);
            assert!(matches!(result, Err(Mesh3dError::InvalidScale(_))));
        }
    }
}
