#![deny(missing_docs)]
//! Raster containers and validity masks for affine image resampling

/// raster representation for single-plane images.
pub mod raster;

/// raster representation for multi-plane images.
pub mod planar;

/// Error types for the raster module.
pub mod error;

pub use crate::error::RasterError;
pub use crate::planar::{PlanarMask, PlanarRaster};
pub use crate::raster::{Mask, Raster, RasterElement, RasterSize};
