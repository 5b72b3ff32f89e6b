use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use photomesh_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored row-major as a flat buffer with shape (H, W, C),
/// where H is the height of the image, W the width and C the number of
/// channels. The buffer is never mutated after construction; every pipeline
/// stage produces a new value.
#[derive(Clone, Debug)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGB image.
pub type Rgb8 = Image<u8, 3>;

/// A dense per-pixel depth estimate aligned to an image's pixel grid.
pub type DepthMap = Image<f32, 1>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major, `CHANNELS`
    ///   interleaved values per pixel.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use photomesh_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image filled with a single value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value to fill the image with.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        Self::new(size, vec![val; size.width * size.height * CHANNELS])
    }

    /// Get the size of the image in pixels.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns (width) of the image.
    #[inline]
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows (height) of the image.
    #[inline]
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels of the image.
    #[inline]
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the channel values of the pixel at grid coordinate (x, y).
    ///
    /// # Arguments
    ///
    /// * `x` - The column of the pixel.
    /// * `y` - The row of the pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the image grid.
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[T], ImageError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(ImageError::PixelOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }
        let offset = (y * self.size.width + x) * CHANNELS;
        Ok(&self.data[offset..offset + CHANNELS])
    }
}
