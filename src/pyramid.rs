//! Multi-resolution frame pyramid used by the debanding pass.
//!
//! Level 0 is the source frame; each subsequent level is the previous one
//! resampled to `floor(w / factor) × floor(h / factor)` through a Gaussian
//! blur followed by bilinear subsampling. Construction stops before any
//! level whose width or height would reach zero, and emits at most
//! `max_levels` levels beyond the original.
use crate::image::FrameF32;
use crate::kernel::ScalerKernel;
use crate::resize::{resize, Scaler};
use rayon::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug)]
pub struct Pyramid {
    pub levels: Vec<FrameF32>,
}

/// Options controlling pyramid construction.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PyramidOptions {
    /// Per-level downscale factor (> 1).
    pub factor: f32,
    /// Maximum number of levels beyond the original.
    pub max_levels: usize,
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self {
            factor: 2.0,
            max_levels: 8,
        }
    }
}

impl PyramidOptions {
    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }
}

impl Pyramid {
    /// Build a fresh pyramid from `source` using the provided blur kernel.
    ///
    /// A source too small to downsample once yields a single-level
    /// pyramid (just the original frame).
    pub fn build(source: &FrameF32, options: PyramidOptions, kernel: &dyn ScalerKernel) -> Self {
        assert!(options.factor > 1.0, "downscale factor must exceed 1");
        let mut levels = Vec::with_capacity(options.max_levels + 1);
        levels.push(source.clone());

        let (mut w, mut h) = (source.width(), source.height());
        for _ in 0..options.max_levels {
            let nw = (w as f32 / options.factor).floor() as usize;
            let nh = (h as f32 / options.factor).floor() as usize;
            if nw == 0 || nh == 0 {
                break;
            }

            let prev = levels.last().expect("previous level available");
            let planes: Vec<_> = prev
                .planes()
                .par_iter()
                .map(|plane| resize(plane, nw, nh, Scaler::Custom { kernel }, Scaler::Bilinear))
                .collect();
            levels.push(FrameF32::from_planes(planes));
            w = nw;
            h = nh;
        }

        Self { levels }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The smallest level (equals level 0 for single-level pyramids).
    pub fn coarsest(&self) -> &FrameF32 {
        self.levels.last().expect("pyramid has at least one level")
    }
}
