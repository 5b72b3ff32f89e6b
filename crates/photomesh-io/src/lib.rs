#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;
pub use error::IoError;

/// High-level read functions dispatching on the image format.
pub mod functional;

/// PNG image reading.
pub mod png;

/// TIFF image reading.
pub mod tiff;
