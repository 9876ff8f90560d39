use rayon::prelude::*;

use rotozoom_raster::{PlanarMask, PlanarRaster, RasterElement, RasterError};

use super::affine::{
    check_mask_size, scale_factor_for, warp_plane, warp_plane_masked, AffineMap,
};

fn check_planes(src: usize, dst: usize) -> Result<(), RasterError> {
    if src != dst {
        return Err(RasterError::PlaneCountMismatch(src, dst));
    }
    Ok(())
}

/// Resample every plane of a planar raster through the same map.
///
/// Planes are independent under the transform, so they are processed in
/// parallel, one rayon task per plane.
fn warp_planes<T: RasterElement>(
    src: &PlanarRaster<T>,
    dst: &mut PlanarRaster<f64>,
    map: &AffineMap,
) {
    let src_len = src.size().num_pixels();
    let dst_len = dst.size().num_pixels();
    if dst_len == 0 {
        return;
    }
    if src_len == 0 {
        dst.as_slice_mut().fill(0.0);
        return;
    }

    let (src_size, dst_size) = (src.size(), dst.size());
    src.as_slice()
        .par_chunks_exact(src_len)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(dst_len))
        .for_each(|(src_plane, dst_plane)| {
            warp_plane(src_plane, src_size, dst_plane, dst_size, map);
        });
}

fn warp_planes_masked<T: RasterElement>(
    src: &PlanarRaster<T>,
    src_mask: &PlanarMask,
    dst: &mut PlanarRaster<f64>,
    dst_mask: &mut PlanarMask,
    map: &AffineMap,
) {
    let src_len = src.size().num_pixels();
    let dst_len = dst.size().num_pixels();
    if dst_len == 0 {
        return;
    }
    if src_len == 0 {
        dst.as_slice_mut().fill(0.0);
        dst_mask.as_slice_mut().fill(false);
        return;
    }

    let (src_size, dst_size) = (src.size(), dst.size());
    src.as_slice()
        .par_chunks_exact(src_len)
        .zip(src_mask.as_slice().par_chunks_exact(src_len))
        .zip(dst.as_slice_mut().par_chunks_exact_mut(dst_len))
        .zip(dst_mask.as_slice_mut().par_chunks_exact_mut(dst_len))
        .for_each(|(((src_plane, src_mask_plane), dst_plane), dst_mask_plane)| {
            warp_plane_masked(
                src_plane,
                src_mask_plane,
                src_size,
                dst_plane,
                dst_mask_plane,
                dst_size,
                map,
            );
        });
}

fn check_masked_shapes<T>(
    src: &PlanarRaster<T>,
    src_mask: &PlanarMask,
    dst: &PlanarRaster<f64>,
    dst_mask: &PlanarMask,
) -> Result<(), RasterError> {
    check_planes(src.planes(), dst.planes())?;
    check_planes(src.planes(), src_mask.planes())?;
    check_planes(src_mask.planes(), dst_mask.planes())?;
    check_mask_size(src.size(), src_mask.size())?;
    check_mask_size(dst.size(), dst_mask.size())?;
    Ok(())
}

/// Rescale a planar raster to the extents of the destination.
///
/// Every plane is rescaled independently with identical parameters, as by
/// [`crate::warp::scale`] on that plane alone.
///
/// # Errors
///
/// Returns an error if the plane counts of source and destination differ.
/// Nothing is written to the destination on failure.
pub fn scale_planar<T: RasterElement>(
    src: &PlanarRaster<T>,
    dst: &mut PlanarRaster<f64>,
) -> Result<(), RasterError> {
    check_planes(src.planes(), dst.planes())?;

    let factor = scale_factor_for(src.size(), dst.size());
    let map = AffineMap::new(0.0, factor, (0.0, 0.0), (0.0, 0.0));
    warp_planes(src, dst, &map);

    Ok(())
}

/// Rescale a planar raster, propagating a validity mask plane by plane.
///
/// # Errors
///
/// Returns an error if plane counts differ or if a mask does not have the
/// extents of its paired raster. Nothing is written on failure.
pub fn scale_planar_masked<T: RasterElement>(
    src: &PlanarRaster<T>,
    src_mask: &PlanarMask,
    dst: &mut PlanarRaster<f64>,
    dst_mask: &mut PlanarMask,
) -> Result<(), RasterError> {
    check_masked_shapes(src, src_mask, dst, dst_mask)?;

    let factor = scale_factor_for(src.size(), dst.size());
    let map = AffineMap::new(0.0, factor, (0.0, 0.0), (0.0, 0.0));
    warp_planes_masked(src, src_mask, dst, dst_mask, &map);

    Ok(())
}

fn rotation_map<T>(
    src: &PlanarRaster<T>,
    dst: &PlanarRaster<f64>,
    angle_degrees: f64,
) -> AffineMap {
    let src_size = src.size();
    let dst_size = dst.size();
    AffineMap::new(
        angle_degrees,
        (1.0, 1.0),
        (
            (src_size.height as f64 - 1.0) / 2.0,
            (src_size.width as f64 - 1.0) / 2.0,
        ),
        (
            (dst_size.height as f64 - 1.0) / 2.0,
            (dst_size.width as f64 - 1.0) / 2.0,
        ),
    )
}

/// Rotate a planar raster by an angle in degrees.
///
/// Every plane is rotated independently with identical parameters, as by
/// [`crate::warp::rotate`] on that plane alone.
///
/// # Errors
///
/// Returns an error if the plane counts of source and destination differ.
/// Nothing is written to the destination on failure.
pub fn rotate_planar<T: RasterElement>(
    src: &PlanarRaster<T>,
    dst: &mut PlanarRaster<f64>,
    angle_degrees: f64,
) -> Result<(), RasterError> {
    check_planes(src.planes(), dst.planes())?;

    let map = rotation_map(src, dst, angle_degrees);
    warp_planes(src, dst, &map);

    Ok(())
}

/// Rotate a planar raster, propagating a validity mask plane by plane.
///
/// # Errors
///
/// Returns an error if plane counts differ or if a mask does not have the
/// extents of its paired raster. Nothing is written on failure.
pub fn rotate_planar_masked<T: RasterElement>(
    src: &PlanarRaster<T>,
    src_mask: &PlanarMask,
    dst: &mut PlanarRaster<f64>,
    dst_mask: &mut PlanarMask,
    angle_degrees: f64,
) -> Result<(), RasterError> {
    check_masked_shapes(src, src_mask, dst, dst_mask)?;

    let map = rotation_map(src, dst, angle_degrees);
    warp_planes_masked(src, src_mask, dst, dst_mask, &map);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::rotated_output_size;
    use crate::warp::{rotate, rotate_masked, scale};
    use rotozoom_raster::{Mask, Raster, RasterSize};

    fn planar_gradient(planes: usize, size: RasterSize) -> PlanarRaster<f64> {
        let data = (0..planes * size.num_pixels()).map(|i| i as f64).collect();
        PlanarRaster::new(planes, size, data).unwrap()
    }

    #[test]
    fn rotate_planar_matches_per_plane_rotate() -> Result<(), RasterError> {
        let size = RasterSize {
            width: 5,
            height: 4,
        };
        let src = planar_gradient(3, size);

        let dst_size = rotated_output_size(size, 30.0);
        let mut dst = PlanarRaster::from_size_val(3, dst_size, 0.0)?;
        rotate_planar(&src, &mut dst, 30.0)?;

        for p in 0..3 {
            let plane = Raster::new(size, src.plane(p)?.to_vec())?;
            let mut expected = Raster::from_size_val(dst_size, 0.0)?;
            rotate(&plane, &mut expected, 30.0);
            assert_eq!(dst.plane(p)?, expected.as_slice());
        }

        Ok(())
    }

    #[test]
    fn scale_planar_matches_per_plane_scale() -> Result<(), RasterError> {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let src = planar_gradient(2, size);

        let dst_size = RasterSize {
            width: 6,
            height: 6,
        };
        let mut dst = PlanarRaster::from_size_val(2, dst_size, 0.0)?;
        scale_planar(&src, &mut dst)?;

        for p in 0..2 {
            let plane = Raster::new(size, src.plane(p)?.to_vec())?;
            let mut expected = Raster::from_size_val(dst_size, 0.0)?;
            scale(&plane, &mut expected);
            assert_eq!(dst.plane(p)?, expected.as_slice());
        }

        Ok(())
    }

    #[test]
    fn plane_count_mismatch_is_rejected_before_writing() -> Result<(), RasterError> {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let src = planar_gradient(3, size);
        let mut dst = PlanarRaster::from_size_val(2, size, 42.0)?;

        let res = scale_planar(&src, &mut dst);

        assert_eq!(res, Err(RasterError::PlaneCountMismatch(3, 2)));
        assert!(dst.as_slice().iter().all(|&v| v == 42.0));

        Ok(())
    }

    #[test]
    fn masked_rotate_planar_matches_per_plane_masked_rotate() -> Result<(), RasterError> {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let src = planar_gradient(2, size);

        // a different validity pattern per plane
        let mut src_mask = PlanarMask::from_size_val(2, size, true)?;
        src_mask.plane_mut(1)?[..8].fill(false);

        let dst_size = rotated_output_size(size, 45.0);
        let mut dst = PlanarRaster::from_size_val(2, dst_size, 0.0)?;
        let mut dst_mask = PlanarMask::from_size_val(2, dst_size, false)?;
        rotate_planar_masked(&src, &src_mask, &mut dst, &mut dst_mask, 45.0)?;

        for p in 0..2 {
            let plane = Raster::new(size, src.plane(p)?.to_vec())?;
            let plane_mask = Mask::new(size, src_mask.plane(p)?.to_vec())?;
            let mut expected = Raster::from_size_val(dst_size, 0.0)?;
            let mut expected_mask = Mask::from_size_val(dst_size, false)?;
            rotate_masked(&plane, &plane_mask, &mut expected, &mut expected_mask, 45.0)?;

            assert_eq!(dst.plane(p)?, expected.as_slice());
            assert_eq!(dst_mask.plane(p)?, expected_mask.as_slice());
        }

        Ok(())
    }

    #[test]
    fn masked_planar_rejects_mask_plane_count() -> Result<(), RasterError> {
        let size = RasterSize {
            width: 4,
            height: 4,
        };
        let src = planar_gradient(2, size);
        let src_mask = PlanarMask::from_size_val(3, size, true)?;

        let mut dst = PlanarRaster::from_size_val(2, size, 0.0)?;
        let mut dst_mask = PlanarMask::from_size_val(2, size, false)?;

        let res = scale_planar_masked(&src, &src_mask, &mut dst, &mut dst_mask);

        assert_eq!(res, Err(RasterError::PlaneCountMismatch(2, 3)));

        Ok(())
    }
}
