#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod filter;
pub mod format;
pub mod image;

// Numeric building blocks – public, but considered unstable internals.
pub mod color;
pub mod deband;
pub mod kernel;
pub mod pyramid;
pub mod resize;

// --- High-level re-exports -------------------------------------------------

// Main entry points: filter + parameters + format tags.
pub use crate::filter::{DebandFilter, DebandParams};
pub use crate::format::{BitDepth, PixelFormat};

// High-level diagnostics returned by the filter.
pub use crate::diagnostics::{FilterReport, PassThroughReason, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use deband_filter::prelude::*;
///
/// # fn main() {
/// let frame = FrameF32::new(640, 480, 3);
/// let filter = DebandFilter::new(DebandParams::default());
/// let report = filter.process_with_diagnostics(&frame, PixelFormat::Nv12);
/// println!(
///     "levels={:?} total_ms={:.3}",
///     report.trace.pyramid.map(|p| p.levels()),
///     report.trace.timing.total_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{FrameF32, ImageF32};
    pub use crate::{DebandFilter, DebandParams, PixelFormat};
}
