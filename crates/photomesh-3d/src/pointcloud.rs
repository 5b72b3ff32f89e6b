/// A colored point cloud.
///
/// Positions and colors are paired index-for-index: `points()[i]` and
/// `colors()[i]` always describe the same sample. The cloud is never
/// mutated after creation; filtering produces a new value.
#[derive(Debug, Clone)]
pub struct PointCloud {
    // The 3d positions of the samples.
    points: Vec<[f64; 3]>,
    // The colors of the samples, r/g/b in [0, 1].
    colors: Vec<[f64; 3]>,
}

impl PointCloud {
    /// Create a new point cloud from positions and paired colors.
    ///
    /// Precondition: `points` and `colors` must have the same length.
    pub fn new(points: Vec<[f64; 3]>, colors: Vec<[f64; 3]>) -> Self {
        assert_eq!(
            points.len(),
            colors.len(),
            "points and colors must be paired one to one"
        );
        Self { points, colors }
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get as reference the positions of the samples.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Get as reference the colors of the samples.
    pub fn colors(&self) -> &[[f64; 3]] {
        &self.colors
    }

    /// Keep only the samples whose position is finite in all three
    /// coordinates.
    ///
    /// Positions and their paired colors are dropped as a unit, so the
    /// index pairing invariant holds for the surviving samples. The
    /// operation is idempotent and may return an empty cloud; rejecting a
    /// cloud too sparse to mesh is the surface builder's job.
    ///
    /// # Example
    ///
    /// ```
    /// use photomesh_3d::PointCloud;
    ///
    /// let cloud = PointCloud::new(
    ///     vec![[0.0, 0.0, 1.0], [f64::NAN, 0.0, 1.0]],
    ///     vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    /// );
    /// let filtered = cloud.filter_finite();
    /// assert_eq!(filtered.len(), 1);
    /// assert_eq!(filtered.colors()[0], [1.0, 0.0, 0.0]);
    /// ```
    pub fn filter_finite(&self) -> PointCloud {
        let (points, colors) = self
            .points
            .iter()
            .zip(self.colors.iter())
            .filter(|(p, _)| p.iter().all(|v| v.is_finite()))
            .map(|(p, c)| (*p, *c))
            .unzip();

        PointCloud { points, colors }
    }
}
