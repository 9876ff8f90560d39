/// An error type for raster containers and the operations consuming them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Error when the buffer length does not match the raster extents.
    #[error("Data length ({0}) does not match the raster extents ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a validity mask has different extents than its paired raster.
    #[error("Mask extents ({mask_height}x{mask_width}) do not match the raster extents ({height}x{width})")]
    MaskSizeMismatch {
        /// Height of the mask in pixels.
        mask_height: usize,
        /// Width of the mask in pixels.
        mask_width: usize,
        /// Height of the paired raster in pixels.
        height: usize,
        /// Width of the paired raster in pixels.
        width: usize,
    },

    /// Error when the plane counts of two planar rasters differ.
    #[error("Plane count mismatch ({0} vs {1})")]
    PlaneCountMismatch(usize, usize),

    /// Error when a plane index is outside the planar raster.
    #[error("Plane index ({0}) is out of bounds ({1} planes)")]
    PlaneOutOfBounds(usize, usize),
}
