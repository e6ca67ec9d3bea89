//! Debanding filter orchestrating the full chain.
//!
//! Overview
//! - Derives the input bit depth from the video path's pixel format and
//!   short-circuits to an identity pass for RGB, unrecognized formats, or
//!   depths above the configured cap. The decision is made once per
//!   invocation; there is no dynamic re-entry.
//! - Converts the frame to a luma/chroma working space so thresholding
//!   sees brightness independently of color encoding.
//! - Builds the blurred half-resolution pyramid and folds it
//!   coarsest-first through the thresholded blend.
//! - Converts back to the output color space and reports per-stage
//!   timings and shapes through [`crate::diagnostics`].
//!
//! Modules
//! - [`params`] – configuration types used by the filter and demo tools.
//! - `pipeline` – the [`DebandFilter`] implementation.

pub mod params;
mod pipeline;

pub use params::{DebandParams, ResolvedBand, DEFAULT_MARGIN, DEFAULT_THRESHOLD};
pub use pipeline::DebandFilter;
