//! Resampling primitive shared by the pyramid builder and the deband stage.
//!
//! `resize` takes a pair of scaler descriptors, one consulted when growing
//! and one when shrinking, mirroring the host-renderer interface the
//! filter was designed against. Shrinking with a custom kernel runs the
//! kernel as a separable clamped-border blur at source resolution and then
//! bilinearly point-samples the target grid, producing a blurred-then-
//! subsampled level in one call. Growing is a plain bilinear upsample.
//!
//! Tap windows are normalized per pixel, so constant planes are fixed
//! points of every path.
use crate::image::ImageF32;
use crate::kernel::ScalerKernel;

/// Descriptor for one resampling direction.
#[derive(Clone, Copy)]
pub enum Scaler<'a> {
    /// Kernel-weighted resampling with the given tap weight function.
    Custom { kernel: &'a dyn ScalerKernel },
    /// Plain bilinear interpolation.
    Bilinear,
}

/// Resample `src` to `tw × th`.
///
/// Panics if the target has a zero dimension; callers prevent that
/// structurally (the pyramid stops before emitting such a level).
pub fn resize(src: &ImageF32, tw: usize, th: usize, upscaler: Scaler, downscaler: Scaler) -> ImageF32 {
    assert!(tw >= 1 && th >= 1, "resize target must be at least 1x1");
    if tw == src.w && th == src.h {
        return src.clone();
    }

    if tw <= src.w && th <= src.h {
        // Shrink: the custom descriptor acts as the prefilter, the
        // downscale descriptor picks the structural sampling.
        let blurred = match upscaler {
            Scaler::Custom { kernel } => Some(blur_separable(src, kernel)),
            Scaler::Bilinear => None,
        };
        let base = blurred.as_ref().unwrap_or(src);
        match downscaler {
            Scaler::Bilinear => sample_bilinear(base, tw, th),
            Scaler::Custom { kernel } => sample_bilinear(&blur_separable(base, kernel), tw, th),
        }
    } else {
        sample_bilinear(src, tw, th)
    }
}

/// Separable blur with clamped borders. The window is the odd tap set
/// `-(r)..=r` with `r = max_taps / 2 - 1`, normalized to unit sum.
fn blur_separable(src: &ImageF32, kernel: &dyn ScalerKernel) -> ImageF32 {
    let radius = (kernel.max_taps() / 2).saturating_sub(1).max(1);
    let mut weights = Vec::with_capacity(2 * radius + 1);
    for i in -(radius as isize)..=(radius as isize) {
        weights.push(kernel.weight(i as f32));
    }
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }

    let (w, h) = (src.w, src.h);
    let mut tmp = ImageF32::new(w, h);
    // Horizontal pass
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, wt) in weights.iter().enumerate() {
                let dx = k as isize - radius as isize;
                let sx = (x as isize + dx).clamp(0, w as isize - 1) as usize;
                acc += src_row[sx] * wt;
            }
            *dst_px = acc;
        }
    }
    // Vertical pass
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, wt) in weights.iter().enumerate() {
                let dy = k as isize - radius as isize;
                let sy = (y as isize + dy).clamp(0, h as isize - 1) as usize;
                acc += tmp.get(x, sy) * wt;
            }
            out.set(x, y, acc);
        }
    }
    out
}

/// Bilinear resample onto `tw × th` using pixel-center coordinates.
fn sample_bilinear(src: &ImageF32, tw: usize, th: usize) -> ImageF32 {
    let mut out = ImageF32::new(tw, th);
    let sx_scale = src.w as f32 / tw as f32;
    let sy_scale = src.h as f32 / th as f32;

    for y in 0..th {
        let fy = ((y as f32 + 0.5) * sy_scale - 0.5).clamp(0.0, (src.h - 1) as f32);
        let y0 = fy.floor() as usize;
        let y1 = (y0 + 1).min(src.h - 1);
        let ty = fy - y0 as f32;
        for x in 0..tw {
            let fx = ((x as f32 + 0.5) * sx_scale - 0.5).clamp(0.0, (src.w - 1) as f32);
            let x0 = fx.floor() as usize;
            let x1 = (x0 + 1).min(src.w - 1);
            let tx = fx - x0 as f32;

            let top = src.get(x0, y0) * (1.0 - tx) + src.get(x1, y0) * tx;
            let bot = src.get(x0, y1) * (1.0 - tx) + src.get(x1, y1) * tx;
            out.set(x, y, top * (1.0 - ty) + bot * ty);
        }
    }
    out
}
