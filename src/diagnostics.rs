//! Per-invocation diagnostics emitted alongside the filtered frame.
//!
//! Everything here is serializable so demo tools can dump a trace as
//! JSON next to the output image.
use crate::image::FrameF32;
use crate::pyramid::Pyramid;
use serde::Serialize;

/// Output frame plus the pipeline trace that produced it.
#[derive(Debug)]
pub struct FilterReport {
    pub output: FrameF32,
    pub trace: PipelineTrace,
}

/// Which stages ran, their shapes, and where the time went.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineTrace {
    /// Present when the invocation short-circuited to identity.
    pub pass_through: Option<PassThroughReason>,
    pub pyramid: Option<PyramidStage>,
    pub deband: Option<DebandStage>,
    pub timing: TimingBreakdown,
}

/// Why the filter returned its input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassThroughReason {
    /// The video path is already RGB; there is nothing to deband.
    RgbInput,
    /// The format's bit depth could not be determined.
    UnknownFormat,
    /// Derived depth exceeds the configured cap.
    OverDepth { bits: u32, max: u32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct PyramidStage {
    /// Width/height of every level, finest first.
    pub level_dims: Vec<(usize, usize)>,
}

impl PyramidStage {
    pub fn from_pyramid(pyramid: &Pyramid) -> Self {
        Self {
            level_dims: pyramid
                .levels
                .iter()
                .map(|l| (l.width(), l.height()))
                .collect(),
        }
    }

    pub fn levels(&self) -> usize {
        self.level_dims.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DebandStage {
    /// Number of combine steps (pyramid levels minus one).
    pub steps: usize,
    /// Peak sample value the threshold band was scaled by.
    pub max_sample_value: u32,
    /// Effective threshold after the advanced-mode override.
    pub threshold: f32,
    /// Effective margin after the advanced-mode override.
    pub margin: f32,
}

/// Stage timings in milliseconds.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TimingBreakdown {
    pub to_working_ms: f64,
    pub pyramid_ms: f64,
    pub deband_ms: f64,
    pub to_output_ms: f64,
    pub total_ms: f64,
}
