//! I/O helpers for frames and JSON.
//!
//! - `load_rgb_frame`: read a PNG/JPEG into a 3-plane `FrameF32` in [0, 1].
//! - `save_frame_png`: write a 1- or 3-plane `FrameF32` to an 8-bit PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{FrameF32, ImageF32};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk into a 3-plane RGB frame normalized to [0, 1].
pub fn load_rgb_frame(path: &Path) -> Result<FrameF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);

    let mut planes = vec![ImageF32::new(w, h), ImageF32::new(w, h), ImageF32::new(w, h)];
    for (x, y, px) in img.enumerate_pixels() {
        for c in 0..3 {
            planes[c].set(x as usize, y as usize, px.0[c] as f32 / 255.0);
        }
    }
    Ok(FrameF32::from_planes(planes))
}

/// Save a frame to an 8-bit PNG, clamping samples to [0, 1].
///
/// Single-plane frames are written as grayscale, 3-plane frames as RGB.
pub fn save_frame_png(frame: &FrameF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (frame.width() as u32, frame.height() as u32);

    match frame.channels() {
        1 => {
            let mut out = GrayImage::new(w, h);
            let plane = frame.plane(0);
            for (x, y, px) in out.enumerate_pixels_mut() {
                px.0[0] = quantize_u8(plane.get(x as usize, y as usize));
            }
            out.save(path)
                .map_err(|e| format!("Failed to save {}: {e}", path.display()))
        }
        3 => {
            let mut out = RgbImage::new(w, h);
            for (x, y, px) in out.enumerate_pixels_mut() {
                for c in 0..3 {
                    px.0[c] = quantize_u8(frame.plane(c).get(x as usize, y as usize));
                }
            }
            out.save(path)
                .map_err(|e| format!("Failed to save {}: {e}", path.display()))
        }
        n => Err(format!("Cannot encode a {n}-plane frame as PNG")),
    }
}

#[inline]
fn quantize_u8(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0).round() as u8
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
