//! Resampling kernels used by the pyramid's blur pass.
//!
//! A kernel maps a sample offset (in source pixels from the destination
//! center) to a tap weight. The weight formula has unbounded support;
//! callers clamp evaluation to `max_taps` sample positions and normalize
//! the resulting window.

/// Trait implemented by resampling kernels handed to the resize primitive.
///
/// `Sync` because pyramid construction evaluates the kernel from parallel
/// per-plane workers.
pub trait ScalerKernel: Sync {
    /// Weight at a signed offset from the window center, in source pixels.
    fn weight(&self, offset: f32) -> f32;

    /// Upper bound on the number of taps the caller may sample.
    fn max_taps(&self) -> usize;

    /// Whether the resampler may apply de-ringing around this kernel.
    fn allow_dering(&self) -> bool {
        false
    }
}

/// Gaussian-shaped low-pass kernel: `exp(-(x² / (2σ²)))`.
///
/// Returns 1.0 at offset 0 and decays monotonically with |offset| for any
/// positive bandwidth. Symmetric by construction.
#[derive(Clone, Copy, Debug)]
pub struct GaussianKernel {
    sigma: f32,
}

/// Bandwidth used by the debanding pyramid's blur pass.
pub const DEFAULT_SIGMA: f32 = 0.75;

/// Tap count cap for the pyramid blur pass.
pub const DEFAULT_TAPS: usize = 8;

impl GaussianKernel {
    pub fn new(sigma: f32) -> Self {
        assert!(sigma > 0.0, "kernel bandwidth must be positive");
        Self { sigma }
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self::new(DEFAULT_SIGMA)
    }
}

impl ScalerKernel for GaussianKernel {
    #[inline]
    fn weight(&self, offset: f32) -> f32 {
        let s = self.sigma;
        (-(offset * offset) / (2.0 * s * s)).exp()
    }

    fn max_taps(&self) -> usize {
        DEFAULT_TAPS
    }
}

#[cfg(test)]
mod tests {
    use super::{GaussianKernel, ScalerKernel};

    #[test]
    fn unit_weight_at_center() {
        for sigma in [0.25f32, 0.75, 1.0, 3.0] {
            let k = GaussianKernel::new(sigma);
            assert_eq!(k.weight(0.0), 1.0, "sigma={sigma}");
        }
    }

    #[test]
    fn symmetric_and_decaying() {
        let k = GaussianKernel::default();
        let mut prev = k.weight(0.0);
        for i in 1..=8 {
            let x = i as f32 * 0.5;
            assert_eq!(k.weight(x), k.weight(-x));
            let w = k.weight(x);
            assert!(w < prev, "weight must decay: w({x})={w} prev={prev}");
            assert!(w > 0.0);
            prev = w;
        }
    }

    #[test]
    #[should_panic(expected = "bandwidth must be positive")]
    fn rejects_zero_bandwidth() {
        let _ = GaussianKernel::new(0.0);
    }
}
