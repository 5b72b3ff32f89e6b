#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::ImageError;

mod image;
pub use image::{DepthMap, Image, ImageSize, Rgb8};
