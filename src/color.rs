//! Working color space conversion.
//!
//! Debanding operates on a luma/chroma-separated representation so the
//! threshold logic sees brightness independently of color encoding. The
//! transform is full-range BT.709 with chroma centered on 0.5, applied as
//! a 3×3 matrix per pixel. Frames that are not 3-channel are already
//! luma-only and pass through unchanged.
use crate::image::{FrameF32, ImageF32};
use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;

/// RGB↔YCbCr matrix pair built once per filter.
#[derive(Clone, Debug)]
pub struct ColorTransform {
    fwd: Matrix3<f32>,
    inv: Matrix3<f32>,
    offset: Vector3<f32>,
}

impl Default for ColorTransform {
    fn default() -> Self {
        Self::bt709()
    }
}

impl ColorTransform {
    /// Full-range BT.709 coefficients.
    pub fn bt709() -> Self {
        let fwd = Matrix3::new(
            0.2126, 0.7152, 0.0722, //
            -0.114_572, -0.385_428, 0.5, //
            0.5, -0.454_153, -0.045_847,
        );
        let inv = Matrix3::new(
            1.0, 0.0, 1.5748, //
            1.0, -0.187_324, -0.468_124, //
            1.0, 1.8556, 0.0,
        );
        Self {
            fwd,
            inv,
            offset: Vector3::new(0.0, 0.5, 0.5),
        }
    }

    /// Convert an RGB frame to the Y/Cb/Cr working space.
    pub fn to_working(&self, frame: &FrameF32) -> FrameF32 {
        if frame.channels() != 3 {
            return frame.clone();
        }
        self.apply(frame, |m, rgb| m.fwd * rgb + m.offset)
    }

    /// Convert a working-space frame back to RGB.
    pub fn to_output(&self, frame: &FrameF32) -> FrameF32 {
        if frame.channels() != 3 {
            return frame.clone();
        }
        self.apply(frame, |m, ycc| m.inv * (ycc - m.offset))
    }

    fn apply<F>(&self, frame: &FrameF32, op: F) -> FrameF32
    where
        F: Fn(&Self, Vector3<f32>) -> Vector3<f32> + Sync,
    {
        let (w, h) = (frame.width(), frame.height());
        let (p0, p1, p2) = (frame.plane(0), frame.plane(1), frame.plane(2));

        let mut out0 = ImageF32::new(w, h);
        let mut out1 = ImageF32::new(w, h);
        let mut out2 = ImageF32::new(w, h);

        out0.data
            .par_iter_mut()
            .zip(out1.data.par_iter_mut())
            .zip(out2.data.par_iter_mut())
            .enumerate()
            .for_each(|(i, ((d0, d1), d2))| {
                let v = op(self, Vector3::new(p0.data[i], p1.data[i], p2.data[i]));
                *d0 = v.x;
                *d1 = v.y;
                *d2 = v.z;
            });

        FrameF32::from_planes(vec![out0, out1, out2])
    }
}

#[cfg(test)]
mod tests {
    use super::ColorTransform;
    use crate::image::{FrameF32, ImageF32};

    fn sample_frame() -> FrameF32 {
        let (w, h) = (5, 4);
        let mut planes = vec![ImageF32::new(w, h), ImageF32::new(w, h), ImageF32::new(w, h)];
        for y in 0..h {
            for x in 0..w {
                planes[0].set(x, y, x as f32 / (w - 1) as f32);
                planes[1].set(x, y, y as f32 / (h - 1) as f32);
                planes[2].set(x, y, (x + y) as f32 / (w + h - 2) as f32);
            }
        }
        FrameF32::from_planes(planes)
    }

    #[test]
    fn round_trip_reproduces_input() {
        let xform = ColorTransform::bt709();
        let frame = sample_frame();
        let back = xform.to_output(&xform.to_working(&frame));
        for c in 0..3 {
            for (&a, &b) in frame.plane(c).data.iter().zip(&back.plane(c).data) {
                assert!((a - b).abs() < 1e-4, "channel {c}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn gray_has_centered_chroma() {
        let gray = FrameF32::from_planes(vec![
            ImageF32::new_fill(2, 2, 0.5),
            ImageF32::new_fill(2, 2, 0.5),
            ImageF32::new_fill(2, 2, 0.5),
        ]);
        let ycc = ColorTransform::bt709().to_working(&gray);
        assert!((ycc.plane(0).get(0, 0) - 0.5).abs() < 1e-4);
        assert!((ycc.plane(1).get(0, 0) - 0.5).abs() < 1e-4);
        assert!((ycc.plane(2).get(0, 0) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn single_plane_passes_through() {
        let luma = FrameF32::from_planes(vec![ImageF32::new_fill(3, 3, 0.7)]);
        let xform = ColorTransform::bt709();
        let out = xform.to_working(&luma);
        assert_eq!(out.channels(), 1);
        assert_eq!(out.plane(0).data, luma.plane(0).data);
    }
}
