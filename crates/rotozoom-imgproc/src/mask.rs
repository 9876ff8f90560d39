use rotozoom_raster::Mask;

/// An axis-aligned rectangular region within a mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Row of the top-left corner.
    pub top: usize,
    /// Column of the top-left corner.
    pub left: usize,
    /// Height of the rectangle in pixels.
    pub height: usize,
    /// Width of the rectangle in pixels.
    pub width: usize,
}

impl Rect {
    /// The number of pixels covered by the rectangle.
    pub fn area(&self) -> usize {
        self.height * self.width
    }
}

/// Find the largest-area axis-aligned rectangle of valid pixels in a mask.
///
/// The result is maximal only when the valid region of the mask is convex;
/// for a non-convex region the returned rectangle still lies within the mask
/// bounds but carries no maximality or validity guarantee. The convexity
/// assumption is not verified at runtime.
///
/// Each row contributes a histogram of consecutive valid heights, over which
/// the largest rectangle is found with a monotonic stack, in
/// O(rows x cols) time and O(cols) auxiliary space.
///
/// # Arguments
///
/// * `mask` - The 2D validity mask to search.
///
/// # Returns
///
/// The rectangle of maximal area. A mask without any valid pixel yields the
/// zero-area rectangle at the origin.
///
/// # Example
///
/// ```
/// use rotozoom_imgproc::mask::{max_rect_in_mask, Rect};
/// use rotozoom_raster::{Mask, RasterSize};
///
/// let mask = Mask::from_size_val(
///     RasterSize {
///         width: 20,
///         height: 10,
///     },
///     true,
/// )
/// .unwrap();
///
/// let rect = max_rect_in_mask(&mask);
/// assert_eq!(
///     rect,
///     Rect {
///         top: 0,
///         left: 0,
///         height: 10,
///         width: 20,
///     }
/// );
/// ```
pub fn max_rect_in_mask(mask: &Mask) -> Rect {
    let rows = mask.rows();
    let cols = mask.cols();
    let data = mask.as_slice();

    let mut best = Rect {
        top: 0,
        left: 0,
        height: 0,
        width: 0,
    };

    // per-column count of consecutive valid pixels ending at the current row
    let mut heights = vec![0usize; cols];
    // monotonic stack of (start column, height) pairs
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(cols + 1);

    for row in 0..rows {
        for (col, height) in heights.iter_mut().enumerate() {
            *height = if data[row * cols + col] {
                *height + 1
            } else {
                0
            };
        }

        stack.clear();
        for col in 0..=cols {
            // a sentinel zero column flushes the stack at the end of the row
            let height = if col < cols { heights[col] } else { 0 };

            let mut start = col;
            while let Some(&(open_col, open_height)) = stack.last() {
                if open_height <= height {
                    break;
                }
                stack.pop();

                let width = col - open_col;
                if open_height * width > best.area() {
                    best = Rect {
                        top: row + 1 - open_height,
                        left: open_col,
                        height: open_height,
                        width,
                    };
                }
                start = open_col;
            }

            if height > 0 && stack.last().map_or(true, |&(_, open)| open < height) {
                stack.push((start, height));
            }
        }
    }

    best
}
