//! Owned multi-plane frame: one `ImageF32` per channel, all the same size.
//!
//! A frame is produced by one stage and consumed by the next; stages never
//! mutate a frame after handing it off. Three planes hold RGB at the input
//! boundary or Y/Cb/Cr inside the pipeline; single-plane frames carry
//! luma-only content.
use super::ImageF32;

#[derive(Clone, Debug)]
pub struct FrameF32 {
    planes: Vec<ImageF32>,
}

impl FrameF32 {
    /// Assemble a frame from per-channel planes.
    ///
    /// Panics if `planes` is empty or the planes disagree on size.
    pub fn from_planes(planes: Vec<ImageF32>) -> Self {
        assert!(!planes.is_empty(), "frame requires at least one plane");
        let (w, h) = (planes[0].w, planes[0].h);
        assert!(
            planes.iter().all(|p| p.w == w && p.h == h),
            "frame planes must share dimensions"
        );
        Self { planes }
    }

    /// Construct a zero-filled frame with `channels` planes of `w × h`.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        assert!(channels > 0, "frame requires at least one plane");
        Self {
            planes: (0..channels).map(|_| ImageF32::new(w, h)).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.planes[0].w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.planes[0].h
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn plane(&self, c: usize) -> &ImageF32 {
        &self.planes[c]
    }

    #[inline]
    pub fn planes(&self) -> &[ImageF32] {
        &self.planes
    }

    /// Consume the frame, returning its planes.
    pub fn into_planes(self) -> Vec<ImageF32> {
        self.planes
    }
}

#[cfg(test)]
mod tests {
    use super::FrameF32;
    use crate::image::ImageF32;

    #[test]
    fn assembles_matching_planes() {
        let frame = FrameF32::from_planes(vec![ImageF32::new(4, 3), ImageF32::new(4, 3)]);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.channels(), 2);
    }

    #[test]
    #[should_panic(expected = "share dimensions")]
    fn rejects_mismatched_planes() {
        let _ = FrameF32::from_planes(vec![ImageF32::new(4, 3), ImageF32::new(3, 4)]);
    }
}
