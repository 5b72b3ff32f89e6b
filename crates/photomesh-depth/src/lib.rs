#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::DepthError;

mod estimator;
pub use estimator::DepthEstimator;

mod file;
pub use file::DepthMapFile;
