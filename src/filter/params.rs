//! User-facing filter parameters.
//!
//! `threshold` and `margin` are expressed in quantization steps of the
//! input bit depth, so one setting behaves consistently across 8/10/16-bit
//! video. Outside advanced mode both are pinned to the defaults no matter
//! what the configuration surface stored.
use serde::Deserialize;

pub const DEFAULT_THRESHOLD: f32 = 0.5;
pub const DEFAULT_MARGIN: f32 = 1.0;

/// Parameters supplied by the configuration surface.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct DebandParams {
    /// Inputs deeper than this many bits pass through unfiltered.
    pub max_bit_depth: u32,
    /// Center of the suppression band, in quantization steps.
    pub threshold: f32,
    /// Width of the transition band, in quantization steps.
    pub margin: f32,
    /// When false, `threshold`/`margin` are ignored in favor of defaults.
    pub advanced_mode: bool,
}

impl Default for DebandParams {
    fn default() -> Self {
        Self {
            max_bit_depth: 8,
            threshold: DEFAULT_THRESHOLD,
            margin: DEFAULT_MARGIN,
            advanced_mode: false,
        }
    }
}

/// Effective threshold band after the advanced-mode override.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedBand {
    pub threshold: f32,
    pub margin: f32,
}

impl DebandParams {
    pub fn resolve(&self) -> ResolvedBand {
        if self.advanced_mode {
            ResolvedBand {
                threshold: self.threshold,
                margin: self.margin,
            }
        } else {
            ResolvedBand {
                threshold: DEFAULT_THRESHOLD,
                margin: DEFAULT_MARGIN,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DebandParams, DEFAULT_MARGIN, DEFAULT_THRESHOLD};

    #[test]
    fn defaults_match_simple_mode() {
        let params = DebandParams::default();
        assert_eq!(params.max_bit_depth, 8);
        assert!(!params.advanced_mode);
        let band = params.resolve();
        assert_eq!(band.threshold, DEFAULT_THRESHOLD);
        assert_eq!(band.margin, DEFAULT_MARGIN);
    }

    #[test]
    fn simple_mode_overrides_stored_values() {
        let params = DebandParams {
            threshold: 3.0,
            margin: 7.5,
            advanced_mode: false,
            ..Default::default()
        };
        let band = params.resolve();
        assert_eq!(band.threshold, DEFAULT_THRESHOLD);
        assert_eq!(band.margin, DEFAULT_MARGIN);
    }

    #[test]
    fn advanced_mode_respects_stored_values() {
        let params = DebandParams {
            threshold: 3.0,
            margin: 7.5,
            advanced_mode: true,
            ..Default::default()
        };
        let band = params.resolve();
        assert_eq!(band.threshold, 3.0);
        assert_eq!(band.margin, 7.5);
    }
}
