use num_traits::AsPrimitive;

use crate::error::RasterError;

/// Raster size in pixels
///
/// A struct to represent the size of a raster in pixels.
///
/// # Examples
///
/// ```
/// use rotozoom_raster::RasterSize;
///
/// let size = RasterSize {
///     width: 10,
///     height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterSize {
    /// Width of the raster in pixels (column, x axis)
    pub width: usize,
    /// Height of the raster in pixels (row, y axis)
    pub height: usize,
}

impl RasterSize {
    /// Number of samples in one plane of this size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for RasterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "RasterSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for RasterSize {
    fn from(size: [usize; 2]) -> Self {
        RasterSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for the closed set of sample types a source raster can carry.
///
/// Destination rasters of the resampling operations are always `f64`;
/// `as_()` lifts a source sample into the accumulator domain.
pub trait RasterElement: Copy + Default + Send + Sync + AsPrimitive<f64> {}

impl RasterElement for u8 {}
impl RasterElement for u16 {}
impl RasterElement for f64 {}

/// A dense, row-major, single-plane 2D raster.
///
/// The first axis is the height (row, y), the second one the width (column, x).
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    size: RasterSize,
    data: Vec<T>,
}

/// A dense boolean raster flagging which pixels hold real data.
pub type Mask = Raster<bool>;

impl<T> Raster<T> {
    /// Create a new raster from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `data` - The sample data in row-major order.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the raster extents, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotozoom_raster::{Raster, RasterSize};
    ///
    /// let raster = Raster::<u8>::new(
    ///     RasterSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(raster.size().width, 10);
    /// assert_eq!(raster.size().height, 20);
    /// ```
    pub fn new(size: RasterSize, data: Vec<T>) -> Result<Self, RasterError> {
        if data.len() != size.num_pixels() {
            return Err(RasterError::InvalidDataLength(
                data.len(),
                size.num_pixels(),
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new raster with the given size, filled with a constant value.
    pub fn from_size_val(size: RasterSize, val: T) -> Result<Self, RasterError>
    where
        T: Clone,
    {
        let data = vec![val; size.num_pixels()];
        Raster::new(size, data)
    }

    /// The size of the raster in pixels.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// The number of rows (height) of the raster.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of columns (width) of the raster.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The sample data as a flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The sample data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get a reference to the sample at the given pixel, or `None` if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotozoom_raster::{Raster, RasterSize};
    ///
    /// let raster = Raster::<u8>::new(
    ///     RasterSize {
    ///         width: 2,
    ///         height: 1,
    ///     },
    ///     vec![3u8, 4],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(raster.get(0, 1), Some(&4));
    /// assert_eq!(raster.get(1, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        self.data.get(row * self.size.width + col)
    }

    /// Consume the raster and return the underlying sample data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
