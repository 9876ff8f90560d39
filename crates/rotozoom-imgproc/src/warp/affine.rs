use num_traits::AsPrimitive;

use rotozoom_raster::{Mask, Raster, RasterElement, RasterError, RasterSize};

use crate::shape::{rotated_output_size, scaled_output_size};

/// Incremental inverse mapping from destination pixels to source coordinates.
///
/// The map is affine in the destination (row, col) index, so walking the
/// destination row-major only needs one coordinate addition per step and one
/// per row, with no per-pixel trigonometry. Coordinates and centers are
/// `(y, x)` pairs; the first axis is the row axis.
#[derive(Clone, Copy, Debug)]
pub struct AffineMap {
    origin: (f64, f64),
    row_step: (f64, f64),
    col_step: (f64, f64),
}

impl AffineMap {
    /// Build the inverse map for a combined rotation, scaling and translation.
    ///
    /// # Arguments
    ///
    /// * `angle_degrees` - The rotation angle in degrees, clockwise-negative.
    /// * `scale` - The per-axis `(y, x)` scale factors. Must be non-zero and
    ///   finite; a degenerate factor is a caller precondition violation and
    ///   propagates as division by zero.
    /// * `src_center` - The transformation center `(y, x)` in source coordinates.
    /// * `dst_center` - The transformation center `(y, x)` in destination coordinates.
    pub fn new(
        angle_degrees: f64,
        scale: (f64, f64),
        src_center: (f64, f64),
        dst_center: (f64, f64),
    ) -> Self {
        let sin_angle = -angle_degrees.to_radians().sin();
        let cos_angle = angle_degrees.to_radians().cos();
        let (scale_y, scale_x) = scale;

        // distance covered in the source when going one pixel in the destination
        let col_dy = -sin_angle / scale_y;
        let col_dx = cos_angle / scale_x;
        let row_dy = cos_angle / scale_y;
        let row_dx = sin_angle / scale_x;

        // source coordinate of the destination pixel (0, 0).
        // NOTE: an alternate derivation divides each trigonometric term by the
        // scale of its own axis instead; the two agree only when the scale is
        // uniform or the rotation is absent. This is the shipped one.
        let origin_y =
            src_center.0 - (dst_center.0 * cos_angle - dst_center.1 * sin_angle) / scale_y;
        let origin_x =
            src_center.1 - (dst_center.1 * cos_angle + dst_center.0 * sin_angle) / scale_x;

        Self {
            origin: (origin_y, origin_x),
            row_step: (row_dy, row_dx),
            col_step: (col_dy, col_dx),
        }
    }

    /// The source coordinate `(y, x)` of the destination pixel (0, 0).
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    /// The source coordinate increment `(dy, dx)` for one destination row step.
    pub fn row_step(&self) -> (f64, f64) {
        self.row_step
    }

    /// The source coordinate increment `(dy, dx)` for one destination column step.
    pub fn col_step(&self) -> (f64, f64) {
        self.col_step
    }
}

/// Compute the per-axis scale factors that map a source onto a destination extent.
///
/// The factors are anchored on the last pixel, `(dst - 1) / (src - 1)` per
/// axis, so the source and destination corners coincide. Both extents must be
/// at least 2 on each axis for the ratio to be defined.
pub fn scale_factor_for(src: RasterSize, dst: RasterSize) -> (f64, f64) {
    let y_scale = (dst.height as f64 - 1.0) / (src.height as f64 - 1.0);
    let x_scale = (dst.width as f64 - 1.0) / (src.width as f64 - 1.0);
    (y_scale, x_scale)
}

pub(crate) fn check_mask_size(size: RasterSize, mask: RasterSize) -> Result<(), RasterError> {
    if size != mask {
        return Err(RasterError::MaskSizeMismatch {
            mask_height: mask.height,
            mask_width: mask.width,
            height: size.height,
            width: size.width,
        });
    }
    Ok(())
}

/// Resample one plane through the inverse map with 4-neighbor bilinear weights.
///
/// Corners falling outside the source contribute zero and the remaining terms
/// are not renormalized, so destination pixels looking past the source border
/// lose energy toward the edge. Each corner is bound-checked against the
/// neighbor index it actually reads, which permits the base index to sit one
/// pixel outside on the low side.
pub(crate) fn warp_plane<T: RasterElement>(
    src: &[T],
    src_size: RasterSize,
    dst: &mut [f64],
    dst_size: RasterSize,
    map: &AffineMap,
) {
    if dst_size.width == 0 {
        return;
    }

    let h = src_size.height as i64 - 1;
    let w = src_size.width as i64 - 1;
    let src_cols = src_size.width;

    let (mut origin_y, mut origin_x) = map.origin;
    let (row_dy, row_dx) = map.row_step;
    let (col_dy, col_dx) = map.col_step;

    for dst_row in dst.chunks_exact_mut(dst_size.width) {
        // set the running source point to the first pixel of the row
        let (mut source_y, mut source_x) = (origin_y, origin_x);
        for out in dst_row.iter_mut() {
            // split the source coordinate into integral and fractional parts
            let oy = source_y.floor();
            let ox = source_x.floor();
            let my = source_y - oy;
            let mx = source_x - ox;
            let (oy, ox) = (oy as i64, ox as i64);

            let mut res = 0.0;

            // upper left
            if ox >= 0 && oy >= 0 && ox <= w && oy <= h {
                res += (1.0 - mx) * (1.0 - my) * src[oy as usize * src_cols + ox as usize].as_();
            }
            // upper right
            if ox >= -1 && oy >= 0 && ox < w && oy <= h {
                res += mx * (1.0 - my) * src[oy as usize * src_cols + (ox + 1) as usize].as_();
            }
            // lower left
            if ox >= 0 && oy >= -1 && ox <= w && oy < h {
                res += (1.0 - mx) * my * src[(oy + 1) as usize * src_cols + ox as usize].as_();
            }
            // lower right
            if ox >= -1 && oy >= -1 && ox < w && oy < h {
                res += mx * my * src[(oy + 1) as usize * src_cols + (ox + 1) as usize].as_();
            }

            *out = res;

            source_y += col_dy;
            source_x += col_dx;
        }
        origin_y += row_dy;
        origin_x += row_dx;
    }
}

/// Mask-aware variant of [`warp_plane`].
///
/// A corner contributes, and flags the destination pixel valid, only when it
/// is in bounds and its source mask bit is set. A destination pixel with no
/// valid corner is written as 0 with its mask bit cleared.
pub(crate) fn warp_plane_masked<T: RasterElement>(
    src: &[T],
    src_mask: &[bool],
    src_size: RasterSize,
    dst: &mut [f64],
    dst_mask: &mut [bool],
    dst_size: RasterSize,
    map: &AffineMap,
) {
    if dst_size.width == 0 {
        return;
    }

    let h = src_size.height as i64 - 1;
    let w = src_size.width as i64 - 1;
    let src_cols = src_size.width;

    let (mut origin_y, mut origin_x) = map.origin;
    let (row_dy, row_dx) = map.row_step;
    let (col_dy, col_dx) = map.col_step;

    for (dst_row, dst_mask_row) in dst
        .chunks_exact_mut(dst_size.width)
        .zip(dst_mask.chunks_exact_mut(dst_size.width))
    {
        let (mut source_y, mut source_x) = (origin_y, origin_x);
        for (out, out_mask) in dst_row.iter_mut().zip(dst_mask_row.iter_mut()) {
            let oy = source_y.floor();
            let ox = source_x.floor();
            let my = source_y - oy;
            let mx = source_x - ox;
            let (oy, ox) = (oy as i64, ox as i64);

            let mut res = 0.0;
            let mut valid = false;

            // upper left
            if ox >= 0 && oy >= 0 && ox <= w && oy <= h {
                let idx = oy as usize * src_cols + ox as usize;
                if src_mask[idx] {
                    res += (1.0 - mx) * (1.0 - my) * src[idx].as_();
                    valid = true;
                }
            }
            // upper right
            if ox >= -1 && oy >= 0 && ox < w && oy <= h {
                let idx = oy as usize * src_cols + (ox + 1) as usize;
                if src_mask[idx] {
                    res += mx * (1.0 - my) * src[idx].as_();
                    valid = true;
                }
            }
            // lower left
            if ox >= 0 && oy >= -1 && ox <= w && oy < h {
                let idx = (oy + 1) as usize * src_cols + ox as usize;
                if src_mask[idx] {
                    res += (1.0 - mx) * my * src[idx].as_();
                    valid = true;
                }
            }
            // lower right
            if ox >= -1 && oy >= -1 && ox < w && oy < h {
                let idx = (oy + 1) as usize * src_cols + (ox + 1) as usize;
                if src_mask[idx] {
                    res += mx * my * src[idx].as_();
                    valid = true;
                }
            }

            *out = res;
            *out_mask = valid;

            source_y += col_dy;
            source_x += col_dx;
        }
        origin_y += row_dy;
        origin_x += row_dx;
    }
}

/// Apply an affine resampling to a 2D raster.
///
/// Every destination pixel is interpolated bilinearly from the 4 integer
/// neighbors of its source coordinate under `map`. The destination extents
/// are free; pixels mapping outside the source receive 0.
///
/// # Arguments
///
/// * `src` - The input raster.
/// * `dst` - The output raster, written in full.
/// * `map` - The inverse destination-to-source mapping.
///
/// # Example
///
/// ```
/// use rotozoom_imgproc::warp::{warp_affine, AffineMap};
/// use rotozoom_raster::{Raster, RasterSize};
///
/// let size = RasterSize {
///     width: 3,
///     height: 3,
/// };
/// let src = Raster::<u8>::from_size_val(size, 1u8).unwrap();
/// let mut dst = Raster::<f64>::from_size_val(size, 0.0).unwrap();
///
/// // identity map
/// let map = AffineMap::new(0.0, (1.0, 1.0), (0.0, 0.0), (0.0, 0.0));
/// warp_affine(&src, &mut dst, &map);
///
/// assert_eq!(dst.as_slice(), &[1.0; 9]);
/// ```
pub fn warp_affine<T: RasterElement>(src: &Raster<T>, dst: &mut Raster<f64>, map: &AffineMap) {
    let (src_size, dst_size) = (src.size(), dst.size());
    warp_plane(src.as_slice(), src_size, dst.as_slice_mut(), dst_size, map);
}

/// Apply an affine resampling to a 2D raster, propagating a validity mask.
///
/// Works like [`warp_affine`], but a source corner only contributes when its
/// mask bit is set, and each destination mask bit records whether any valid
/// corner contributed to the pixel.
///
/// # Errors
///
/// Returns an error if a mask does not have the extents of its paired raster.
/// Nothing is written to the destination on failure.
pub fn warp_affine_masked<T: RasterElement>(
    src: &Raster<T>,
    src_mask: &Mask,
    dst: &mut Raster<f64>,
    dst_mask: &mut Mask,
    map: &AffineMap,
) -> Result<(), RasterError> {
    check_mask_size(src.size(), src_mask.size())?;
    check_mask_size(dst.size(), dst_mask.size())?;

    let (src_size, dst_size) = (src.size(), dst.size());
    warp_plane_masked(
        src.as_slice(),
        src_mask.as_slice(),
        src_size,
        dst.as_slice_mut(),
        dst_mask.as_slice_mut(),
        dst_size,
        map,
    );

    Ok(())
}

/// Rescale a 2D raster to the extents of the destination.
///
/// The per-axis factors are derived from the two extents with
/// [`scale_factor_for`], so the last source pixel maps onto the last
/// destination pixel. Both extents must be at least 2 on each axis.
///
/// # Example
///
/// ```
/// use rotozoom_imgproc::warp::scale;
/// use rotozoom_raster::{Raster, RasterSize};
///
/// let src = Raster::<u8>::new(
///     RasterSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0u8, 10, 10, 20],
/// )
/// .unwrap();
/// let mut dst = Raster::<f64>::from_size_val(
///     RasterSize {
///         width: 3,
///         height: 3,
///     },
///     0.0,
/// )
/// .unwrap();
///
/// scale(&src, &mut dst);
///
/// assert_eq!(dst.get(1, 1), Some(&10.0));
/// ```
pub fn scale<T: RasterElement>(src: &Raster<T>, dst: &mut Raster<f64>) {
    let factor = scale_factor_for(src.size(), dst.size());
    let map = AffineMap::new(0.0, factor, (0.0, 0.0), (0.0, 0.0));
    warp_affine(src, dst, &map);
}

/// Rescale a 2D raster to the extents of the destination, propagating a validity mask.
///
/// # Errors
///
/// Returns an error if a mask does not have the extents of its paired raster.
pub fn scale_masked<T: RasterElement>(
    src: &Raster<T>,
    src_mask: &Mask,
    dst: &mut Raster<f64>,
    dst_mask: &mut Mask,
) -> Result<(), RasterError> {
    let factor = scale_factor_for(src.size(), dst.size());
    let map = AffineMap::new(0.0, factor, (0.0, 0.0), (0.0, 0.0));
    warp_affine_masked(src, src_mask, dst, dst_mask, &map)
}

/// Rescale a 2D raster by a factor into a newly allocated destination.
///
/// The destination extents are dictated by [`scaled_output_size`].
///
/// # Errors
///
/// Returns an error if the destination raster cannot be constructed.
pub fn scale_by<T: RasterElement>(src: &Raster<T>, factor: f64) -> Result<Raster<f64>, RasterError> {
    let mut dst = Raster::from_size_val(scaled_output_size(src.size(), factor), 0.0)?;
    scale(src, &mut dst);
    Ok(dst)
}

fn geometric_center(size: RasterSize) -> (f64, f64) {
    (
        (size.height as f64 - 1.0) / 2.0,
        (size.width as f64 - 1.0) / 2.0,
    )
}

/// Rotate a 2D raster by an angle in degrees.
///
/// The rotation centers are the geometric centers of the source and the
/// destination. A destination sized by [`rotated_output_size`] contains the
/// whole rotated source; any other extents crop or pad around the center.
pub fn rotate<T: RasterElement>(src: &Raster<T>, dst: &mut Raster<f64>, angle_degrees: f64) {
    let map = AffineMap::new(
        angle_degrees,
        (1.0, 1.0),
        geometric_center(src.size()),
        geometric_center(dst.size()),
    );
    warp_affine(src, dst, &map);
}

/// Rotate a 2D raster by an angle in degrees, propagating a validity mask.
///
/// # Errors
///
/// Returns an error if a mask does not have the extents of its paired raster.
pub fn rotate_masked<T: RasterElement>(
    src: &Raster<T>,
    src_mask: &Mask,
    dst: &mut Raster<f64>,
    dst_mask: &mut Mask,
    angle_degrees: f64,
) -> Result<(), RasterError> {
    let map = AffineMap::new(
        angle_degrees,
        (1.0, 1.0),
        geometric_center(src.size()),
        geometric_center(dst.size()),
    );
    warp_affine_masked(src, src_mask, dst, dst_mask, &map)
}

/// Rotate a 2D raster by an angle into a newly allocated destination.
///
/// The destination extents are dictated by [`rotated_output_size`].
///
/// # Errors
///
/// Returns an error if the destination raster cannot be constructed.
pub fn rotate_by<T: RasterElement>(
    src: &Raster<T>,
    angle_degrees: f64,
) -> Result<Raster<f64>, RasterError> {
    let mut dst = Raster::from_size_val(rotated_output_size(src.size(), angle_degrees), 0.0)?;
    rotate(src, &mut dst, angle_degrees);
    Ok(dst)
}
