//! Thresholded pyramid recombination.
//!
//! Each step blends one coarse level (bilinearly upsampled inline) with
//! the next finer level. Per pixel and channel, the delta between fine
//! and smoothed values is measured in quantization steps of the input bit
//! depth; deltas at or below `threshold` steps are replaced by the smooth
//! value, deltas at or beyond `threshold + margin` steps are kept as
//! genuine edges, with a smoothstep ramp in between. Expressing the band
//! in quantization steps keeps one threshold setting consistent across
//! 8/10/16-bit inputs.
use crate::image::{FrameF32, ImageF32};
use crate::pyramid::Pyramid;
use crate::resize::{resize, Scaler};
use rayon::prelude::*;

/// Blend an upsampled coarse frame with the next finer frame.
///
/// The output has `fine`'s dimensions. `max_sample_value` is the
/// bit-depth-derived peak, e.g. 255 for 8-bit input.
pub fn combine(
    coarse: &FrameF32,
    fine: &FrameF32,
    max_sample_value: f32,
    threshold: f32,
    margin: f32,
) -> FrameF32 {
    assert_eq!(
        coarse.channels(),
        fine.channels(),
        "coarse and fine frames must share channel count"
    );

    let planes: Vec<_> = fine
        .planes()
        .par_iter()
        .zip(coarse.planes().par_iter())
        .map(|(fine_plane, coarse_plane)| {
            combine_plane(coarse_plane, fine_plane, max_sample_value, threshold, margin)
        })
        .collect();
    FrameF32::from_planes(planes)
}

fn combine_plane(
    coarse: &ImageF32,
    fine: &ImageF32,
    max_sample_value: f32,
    threshold: f32,
    margin: f32,
) -> ImageF32 {
    let up = resize(coarse, fine.w, fine.h, Scaler::Bilinear, Scaler::Bilinear);

    let mut out = ImageF32::new(fine.w, fine.h);
    for ((dst, &f), &u) in out.data.iter_mut().zip(&fine.data).zip(&up.data) {
        let d = f - u;
        let amplitude = d.abs() * max_sample_value;
        let keep = smoothstep(threshold, threshold + margin, amplitude);
        *dst = u + d * keep;
    }
    out
}

/// Fold the pyramid coarsest-first into a full-resolution debanded frame.
///
/// A single-level pyramid degenerates to an identity pass.
pub fn reconstruct(
    pyramid: &Pyramid,
    max_sample_value: f32,
    threshold: f32,
    margin: f32,
) -> FrameF32 {
    let mut deband = pyramid.coarsest().clone();
    for finer in pyramid.levels.iter().rev().skip(1) {
        deband = combine(&deband, finer, max_sample_value, threshold, margin);
    }
    deband
}

/// Hermite ramp: 0 at or below `e0`, 1 at or beyond `e1`.
#[inline]
fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    if e1 <= e0 {
        // Degenerate band: hard step.
        return if x >= e1 { 1.0 } else { 0.0 };
    }
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::{combine, reconstruct, smoothstep};
    use crate::image::{FrameF32, ImageF32};
    use crate::kernel::GaussianKernel;
    use crate::pyramid::{Pyramid, PyramidOptions};

    fn flat_frame(w: usize, h: usize, value: f32) -> FrameF32 {
        FrameF32::from_planes(vec![ImageF32::new_fill(w, h, value)])
    }

    #[test]
    fn ramp_endpoints() {
        assert_eq!(smoothstep(0.5, 1.5, 0.0), 0.0);
        assert_eq!(smoothstep(0.5, 1.5, 0.5), 0.0);
        assert_eq!(smoothstep(0.5, 1.5, 1.5), 1.0);
        assert_eq!(smoothstep(0.5, 1.5, 9.0), 1.0);
        let mid = smoothstep(0.5, 1.5, 1.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_delta_passes_through() {
        let coarse = flat_frame(4, 4, 0.5);
        let fine = flat_frame(8, 8, 0.5);
        let out = combine(&coarse, &fine, 255.0, 0.5, 1.0);
        for &v in &out.plane(0).data {
            assert!((v - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn sub_threshold_delta_is_replaced() {
        // 0.3 quantization steps of offset: inside the fully-suppressed band.
        let coarse = flat_frame(4, 4, 0.5);
        let fine = flat_frame(8, 8, 0.5 + 0.3 / 255.0);
        let out = combine(&coarse, &fine, 255.0, 0.5, 1.0);
        for &v in &out.plane(0).data {
            assert!((v - 0.5).abs() < 1e-6, "expected smoothed value, got {v}");
        }
    }

    #[test]
    fn large_delta_is_preserved() {
        // 20 quantization steps: far beyond the transition band.
        let coarse = flat_frame(4, 4, 0.5);
        let fine = flat_frame(8, 8, 0.5 + 20.0 / 255.0);
        let out = combine(&coarse, &fine, 255.0, 0.5, 1.0);
        for (&v, &f) in out.plane(0).data.iter().zip(&fine.plane(0).data) {
            assert!((v - f).abs() < 1e-6, "expected fine value, got {v}");
        }
    }

    #[test]
    fn output_matches_fine_dimensions() {
        let coarse = flat_frame(3, 2, 0.1);
        let fine = flat_frame(7, 5, 0.1);
        let out = combine(&coarse, &fine, 255.0, 0.5, 1.0);
        assert_eq!((out.width(), out.height()), (7, 5));
    }

    #[test]
    fn single_level_reconstruct_is_identity() {
        let frame = flat_frame(1, 1, 0.25);
        let pyr = Pyramid::build(&frame, PyramidOptions::default(), &GaussianKernel::default());
        assert_eq!(pyr.len(), 1);
        let out = reconstruct(&pyr, 255.0, 0.5, 1.0);
        assert_eq!(out.plane(0).data, frame.plane(0).data);
    }
}
