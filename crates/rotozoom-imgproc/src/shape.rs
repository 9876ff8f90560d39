use rotozoom_raster::RasterSize;

/// Compute the destination extents for scaling a raster by a factor.
///
/// Each axis is scaled independently and rounded to the nearest integer,
/// so for non-round factors the resulting extents are a best effort.
/// The plane axis of a multi-plane raster is not affected by scaling;
/// [`rotozoom_raster::PlanarRaster`] carries it separately from its size.
///
/// # Arguments
///
/// * `src` - The extents of the source raster.
/// * `factor` - The scaling factor to apply to both axes.
///
/// # Returns
///
/// The extents the destination raster must have for a subsequent
/// [`crate::warp::scale`] to reproduce the requested factor.
///
/// # Example
///
/// ```
/// use rotozoom_imgproc::shape::scaled_output_size;
/// use rotozoom_raster::RasterSize;
///
/// let dst = scaled_output_size(
///     RasterSize {
///         width: 4,
///         height: 4,
///     },
///     1.5,
/// );
///
/// assert_eq!(dst.width, 6);
/// assert_eq!(dst.height, 6);
/// ```
pub fn scaled_output_size(src: RasterSize, factor: f64) -> RasterSize {
    RasterSize {
        width: (src.width as f64 * factor + 0.5).floor() as usize,
        height: (src.height as f64 * factor + 0.5).floor() as usize,
    }
}

/// Compute the destination extents for rotating a raster by an angle.
///
/// The result is the axis-aligned bounding box of the source rectangle
/// rotated by the given angle, rounded to the nearest integer.
///
/// # Arguments
///
/// * `src` - The extents of the source raster.
/// * `angle_degrees` - The rotation angle in degrees.
///
/// # Returns
///
/// The extents the destination raster must have for a subsequent
/// [`crate::warp::rotate`] to contain the whole rotated source.
///
/// # Example
///
/// ```
/// use rotozoom_imgproc::shape::rotated_output_size;
/// use rotozoom_raster::RasterSize;
///
/// let dst = rotated_output_size(
///     RasterSize {
///         width: 100,
///         height: 50,
///     },
///     90.0,
/// );
///
/// assert_eq!(dst.width, 50);
/// assert_eq!(dst.height, 100);
/// ```
pub fn rotated_output_size(src: RasterSize, angle_degrees: f64) -> RasterSize {
    let rad = angle_degrees.to_radians();
    let abs_cos = rad.cos().abs();
    let abs_sin = rad.sin().abs();

    let h = src.height as f64;
    let w = src.width as f64;

    RasterSize {
        height: (h * abs_cos + w * abs_sin + 0.5).floor() as usize,
        width: (w * abs_cos + h * abs_sin + 0.5).floor() as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_size_rounds_to_nearest() {
        let src = RasterSize {
            width: 5,
            height: 3,
        };

        let up = scaled_output_size(src, 1.5);
        assert_eq!(
            up,
            RasterSize {
                width: 8,
                height: 5
            }
        );

        let down = scaled_output_size(src, 0.5);
        assert_eq!(
            down,
            RasterSize {
                width: 3,
                height: 2
            }
        );
    }

    #[test]
    fn scaled_size_identity() {
        let src = RasterSize {
            width: 7,
            height: 9,
        };
        assert_eq!(scaled_output_size(src, 1.0), src);
    }

    #[test]
    fn rotated_size_quarter_turn_swaps_axes() {
        let src = RasterSize {
            width: 100,
            height: 50,
        };

        let dst = rotated_output_size(src, 90.0);
        assert_eq!(
            dst,
            RasterSize {
                width: 50,
                height: 100
            }
        );

        let dst = rotated_output_size(src, 270.0);
        assert_eq!(
            dst,
            RasterSize {
                width: 50,
                height: 100
            }
        );
    }

    #[test]
    fn rotated_size_zero_and_half_turn_keep_axes() {
        let src = RasterSize {
            width: 100,
            height: 50,
        };

        assert_eq!(rotated_output_size(src, 0.0), src);
        assert_eq!(rotated_output_size(src, 180.0), src);
        assert_eq!(rotated_output_size(src, 360.0), src);
    }

    #[test]
    fn rotated_size_diagonal() {
        let src = RasterSize {
            width: 100,
            height: 100,
        };

        let dst = rotated_output_size(src, 45.0);
        // the diagonal of a 100x100 square is ~141.4
        assert_eq!(
            dst,
            RasterSize {
                width: 141,
                height: 141
            }
        );
    }
}
