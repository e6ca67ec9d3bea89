//! Owned single-channel f32 plane in row-major layout (stride == width).
//!
//! All pipeline stages operate on planes of this type, one per channel.
//! Samples are normalized to [0, 1] at the input boundary and stay there
//! through the pipeline (linear filtering of [0, 1] data).
#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Plane width in pixels
    pub w: usize,
    /// Plane height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Construct a plane filled with a constant value.
    pub fn new_fill(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer. Panics if the length does not
    /// match `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), w * h, "plane buffer length mismatch");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the sample value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the sample value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
    #[inline]
    /// Read-only view of row `y`.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    /// Mutable view of row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::ImageF32;

    #[test]
    fn indexing_and_rows() {
        let mut img = ImageF32::new(3, 2);
        img.set(2, 1, 0.5);
        assert_eq!(img.get(2, 1), 0.5);
        assert_eq!(img.row(1), &[0.0, 0.0, 0.5]);
        img.row_mut(0)[0] = 1.0;
        assert_eq!(img.get(0, 0), 1.0);
    }

    #[test]
    fn from_vec_round_trip() {
        let img = ImageF32::from_vec(2, 2, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(img.data, &[0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn from_vec_rejects_bad_length() {
        let _ = ImageF32::from_vec(2, 2, vec![0.0; 3]);
    }
}
