//! Input pixel formats of the upstream video path and their bit depths.
//!
//! The filter never decodes these formats itself; the tag only determines
//! the quantization step size the threshold band is measured in, and
//! whether the frame should bypass the filter entirely.
use serde::Deserialize;

/// Frame-buffer input format reported by the video path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    Nv12,
    Yv12,
    Yuy2,
    P010,
    Y410,
    P016,
    Y416,
    Rgb24,
    Rgb32,
    /// Anything the video path could not classify.
    Unknown,
}

/// Bit depth derived from the input format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    Bits8,
    Bits10,
    Bits16,
    /// Already RGB or unrecognized: the filter becomes an identity pass.
    PassThrough,
}

impl PixelFormat {
    pub fn bit_depth(self) -> BitDepth {
        match self {
            PixelFormat::Nv12 | PixelFormat::Yv12 | PixelFormat::Yuy2 => BitDepth::Bits8,
            PixelFormat::P010 | PixelFormat::Y410 => BitDepth::Bits10,
            PixelFormat::P016 | PixelFormat::Y416 => BitDepth::Bits16,
            PixelFormat::Rgb24 | PixelFormat::Rgb32 | PixelFormat::Unknown => {
                BitDepth::PassThrough
            }
        }
    }

    pub fn is_rgb(self) -> bool {
        matches!(self, PixelFormat::Rgb24 | PixelFormat::Rgb32)
    }
}

impl BitDepth {
    /// Number of significant bits, if the depth is numeric.
    pub fn bits(self) -> Option<u32> {
        match self {
            BitDepth::Bits8 => Some(8),
            BitDepth::Bits10 => Some(10),
            BitDepth::Bits16 => Some(16),
            BitDepth::PassThrough => None,
        }
    }

    /// `(1 << bits) - 1`, the peak sample value at this depth.
    pub fn max_sample_value(self) -> Option<u32> {
        self.bits().map(|b| (1u32 << b) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{BitDepth, PixelFormat};

    #[test]
    fn format_depth_mapping() {
        assert_eq!(PixelFormat::Nv12.bit_depth(), BitDepth::Bits8);
        assert_eq!(PixelFormat::Yuy2.bit_depth(), BitDepth::Bits8);
        assert_eq!(PixelFormat::P010.bit_depth(), BitDepth::Bits10);
        assert_eq!(PixelFormat::Y410.bit_depth(), BitDepth::Bits10);
        assert_eq!(PixelFormat::P016.bit_depth(), BitDepth::Bits16);
        assert_eq!(PixelFormat::Y416.bit_depth(), BitDepth::Bits16);
        assert_eq!(PixelFormat::Rgb24.bit_depth(), BitDepth::PassThrough);
        assert_eq!(PixelFormat::Rgb32.bit_depth(), BitDepth::PassThrough);
        assert_eq!(PixelFormat::Unknown.bit_depth(), BitDepth::PassThrough);
    }

    #[test]
    fn peak_values() {
        assert_eq!(BitDepth::Bits8.max_sample_value(), Some(255));
        assert_eq!(BitDepth::Bits10.max_sample_value(), Some(1023));
        assert_eq!(BitDepth::Bits16.max_sample_value(), Some(65535));
        assert_eq!(BitDepth::PassThrough.max_sample_value(), None);
    }
}
