use crate::error::RasterError;
use crate::raster::RasterSize;

/// A dense, row-major, multi-plane 3D raster.
///
/// The leading axis is the plane (color/channel) index; every plane is an
/// independent 2D raster and all planes share the same extents. The layout is
/// `[plane][row][col]`, so each plane occupies one contiguous slice.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanarRaster<T> {
    planes: usize,
    size: RasterSize,
    data: Vec<T>,
}

/// A dense boolean multi-plane raster flagging which pixels hold real data.
pub type PlanarMask = PlanarRaster<bool>;

impl<T> PlanarRaster<T> {
    /// Create a new planar raster from sample data.
    ///
    /// # Arguments
    ///
    /// * `planes` - The number of planes (color/channel bands).
    /// * `size` - The shared per-plane size in pixels.
    /// * `data` - The sample data, plane-major then row-major.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match `planes * height * width`,
    /// an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotozoom_raster::{PlanarRaster, RasterSize};
    ///
    /// let raster = PlanarRaster::<u8>::new(
    ///     3,
    ///     RasterSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 3 * 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(raster.planes(), 3);
    /// assert_eq!(raster.size().height, 20);
    /// ```
    pub fn new(planes: usize, size: RasterSize, data: Vec<T>) -> Result<Self, RasterError> {
        if data.len() != planes * size.num_pixels() {
            return Err(RasterError::InvalidDataLength(
                data.len(),
                planes * size.num_pixels(),
            ));
        }

        Ok(Self { planes, size, data })
    }

    /// Create a new planar raster with the given shape, filled with a constant value.
    pub fn from_size_val(planes: usize, size: RasterSize, val: T) -> Result<Self, RasterError>
    where
        T: Clone,
    {
        let data = vec![val; planes * size.num_pixels()];
        PlanarRaster::new(planes, size, data)
    }

    /// The number of planes of the raster.
    pub fn planes(&self) -> usize {
        self.planes
    }

    /// The shared per-plane size in pixels.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// The number of rows (height) of each plane.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of columns (width) of each plane.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The sample data of one plane as a row-major slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane index is out of bounds.
    pub fn plane(&self, p: usize) -> Result<&[T], RasterError> {
        if p >= self.planes {
            return Err(RasterError::PlaneOutOfBounds(p, self.planes));
        }
        let len = self.size.num_pixels();
        Ok(&self.data[p * len..(p + 1) * len])
    }

    /// The sample data of one plane as a mutable row-major slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane index is out of bounds.
    pub fn plane_mut(&mut self, p: usize) -> Result<&mut [T], RasterError> {
        if p >= self.planes {
            return Err(RasterError::PlaneOutOfBounds(p, self.planes));
        }
        let len = self.size.num_pixels();
        Ok(&mut self.data[p * len..(p + 1) * len])
    }

    /// The sample data as a flat plane-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The sample data as a mutable flat plane-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
