//! Filter pipeline driving the debanding chain end-to-end.
//!
//! The [`DebandFilter`] exposes a simple API: feed a frame plus the video
//! path's pixel format and get the filtered frame back. Internally it
//! decides the pass-through state once per invocation, converts to the
//! working color space, builds the pyramid, folds it coarsest-first
//! through the thresholded blend, and converts back.
//!
//! Typical usage:
//! ```no_run
//! use deband_filter::{DebandFilter, DebandParams, PixelFormat};
//! use deband_filter::image::FrameF32;
//!
//! # fn example(frame: FrameF32) {
//! let filter = DebandFilter::new(DebandParams::default());
//! let report = filter.process_with_diagnostics(&frame, PixelFormat::Nv12);
//! println!("total: {:.3} ms", report.trace.timing.total_ms);
//! # }
//! ```
use super::params::DebandParams;
use crate::color::ColorTransform;
use crate::deband::reconstruct;
use crate::diagnostics::{
    DebandStage, FilterReport, PassThroughReason, PipelineTrace, PyramidStage, TimingBreakdown,
};
use crate::format::{BitDepth, PixelFormat};
use crate::image::FrameF32;
use crate::kernel::GaussianKernel;
use crate::pyramid::{Pyramid, PyramidOptions};
use log::debug;
use std::time::Instant;

/// Debanding filter orchestrating color conversion, pyramid construction
/// and bottom-up thresholded recombination.
pub struct DebandFilter {
    params: DebandParams,
    kernel: GaussianKernel,
    color: ColorTransform,
    pyramid_options: PyramidOptions,
}

impl DebandFilter {
    /// Create a filter with the supplied parameters and default pyramid
    /// geometry (factor 2, up to 8 extra levels, σ = 0.75 blur).
    pub fn new(params: DebandParams) -> Self {
        Self {
            params,
            kernel: GaussianKernel::default(),
            color: ColorTransform::bt709(),
            pyramid_options: PyramidOptions::default(),
        }
    }

    pub fn with_pyramid_options(mut self, options: PyramidOptions) -> Self {
        self.pyramid_options = options;
        self
    }

    pub fn with_kernel(mut self, kernel: GaussianKernel) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn params(&self) -> &DebandParams {
        &self.params
    }

    /// Run the filter, returning only the output frame.
    pub fn process(&self, frame: &FrameF32, format: PixelFormat) -> FrameF32 {
        self.process_with_diagnostics(frame, format).output
    }

    /// Run the filter and return both the output and a detailed trace.
    pub fn process_with_diagnostics(&self, frame: &FrameF32, format: PixelFormat) -> FilterReport {
        let total_start = Instant::now();
        debug!(
            "DebandFilter::process start w={} h={} format={:?}",
            frame.width(),
            frame.height(),
            format
        );

        if let Some(reason) = self.pass_through_reason(format) {
            debug!("DebandFilter::process pass-through: {reason:?}");
            return FilterReport {
                output: frame.clone(),
                trace: PipelineTrace {
                    pass_through: Some(reason),
                    timing: TimingBreakdown {
                        total_ms: ms_since(total_start),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            };
        }

        let depth = format.bit_depth();
        let max_sample_value = depth
            .max_sample_value()
            .expect("numeric depth in processing state");
        let band = self.params.resolve();

        let stage_start = Instant::now();
        let working = self.color.to_working(frame);
        let to_working_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        let pyramid = Pyramid::build(&working, self.pyramid_options, &self.kernel);
        let pyramid_ms = ms_since(stage_start);
        debug!(
            "DebandFilter::process pyramid levels={} coarsest={}x{}",
            pyramid.len(),
            pyramid.coarsest().width(),
            pyramid.coarsest().height()
        );

        let stage_start = Instant::now();
        let debanded = reconstruct(
            &pyramid,
            max_sample_value as f32,
            band.threshold,
            band.margin,
        );
        let deband_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        let output = self.color.to_output(&debanded);
        let to_output_ms = ms_since(stage_start);

        let trace = PipelineTrace {
            pass_through: None,
            pyramid: Some(PyramidStage::from_pyramid(&pyramid)),
            deband: Some(DebandStage {
                steps: pyramid.len() - 1,
                max_sample_value,
                threshold: band.threshold,
                margin: band.margin,
            }),
            timing: TimingBreakdown {
                to_working_ms,
                pyramid_ms,
                deband_ms,
                to_output_ms,
                total_ms: ms_since(total_start),
            },
        };
        FilterReport { output, trace }
    }

    /// Decide the terminal state once per invocation.
    fn pass_through_reason(&self, format: PixelFormat) -> Option<PassThroughReason> {
        match format.bit_depth() {
            BitDepth::PassThrough => Some(if format.is_rgb() {
                PassThroughReason::RgbInput
            } else {
                PassThroughReason::UnknownFormat
            }),
            depth => {
                let bits = depth.bits().expect("numeric depth has bit count");
                (bits > self.params.max_bit_depth)
                    .then_some(PassThroughReason::OverDepth {
                        bits,
                        max: self.params.max_bit_depth,
                    })
            }
        }
    }
}

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
