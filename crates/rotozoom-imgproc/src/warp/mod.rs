//! Affine geometric transformations of rasters.
//!
//! This module resamples a source raster into a destination raster under a
//! combined rotation, anisotropic scaling and translation, using bilinear
//! interpolation:
//!
//! - [`warp_affine`] / [`warp_affine_masked`] take an explicit [`AffineMap`]
//! - [`scale`] and [`rotate`] (and their masked and planar forms) derive the
//!   map from the raster extents
//!
//! The inverse mapping is evaluated incrementally while walking the
//! destination row-major, one coordinate addition per pixel. For rotation by
//! angle θ the source position of a destination pixel is:
//!
//! ```text
//! src_y = origin_y + row * row_dy + col * col_dy
//! src_x = origin_x + row * row_dx + col * col_dx
//! ```
//!
//! Source pixels carry `u8`, `u16` or `f64` samples; destinations are always
//! `f64`. Optional validity masks propagate through the transform: a
//! destination pixel is valid when at least one in-bounds, valid source
//! neighbor contributed to it.

mod affine;
mod planar;

pub use affine::{
    rotate, rotate_by, rotate_masked, scale, scale_by, scale_factor_for, scale_masked,
    warp_affine, warp_affine_masked, AffineMap,
};
pub use planar::{rotate_planar, rotate_planar_masked, scale_planar, scale_planar_masked};
