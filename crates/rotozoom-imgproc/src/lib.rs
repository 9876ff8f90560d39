#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for validity masks.
pub mod mask;

/// destination extent prediction for scaled and rotated rasters.
pub mod shape;

/// raster geometric transformations module.
pub mod warp;
