use deband_filter::image::{FrameF32, ImageF32};

/// Flat mid-gray frame with vertical banding: alternating column blocks
/// offset by ±`amplitude` around 0.5, mimicking quantization banding in a
/// smooth region.
pub fn banded_flat_frame(width: usize, height: usize, block: usize, amplitude: f32) -> FrameF32 {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    assert!(block > 0, "block width must be positive");

    let mut plane = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sign = if (x / block) & 1 == 0 { 1.0 } else { -1.0 };
            plane.set(x, y, 0.5 + sign * amplitude);
        }
    }
    FrameF32::from_planes(vec![plane.clone(), plane.clone(), plane])
}

/// High-contrast vertical step edge: `low` on the left half, `high` on the
/// right half.
pub fn step_edge_frame(width: usize, height: usize, low: f32, high: f32) -> FrameF32 {
    assert!(width >= 2 && height > 0, "frame dimensions must be positive");

    let mut plane = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { low } else { high };
            plane.set(x, y, v);
        }
    }
    FrameF32::from_planes(vec![plane.clone(), plane.clone(), plane])
}

/// Per-channel sample variance.
pub fn channel_variance(frame: &FrameF32, channel: usize) -> f64 {
    let data = &frame.plane(channel).data;
    let n = data.len() as f64;
    let mean: f64 = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    data.iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// Largest horizontal sample-to-sample difference in a channel.
pub fn max_horizontal_step(frame: &FrameF32, channel: usize) -> f32 {
    let plane = frame.plane(channel);
    let mut max_step = 0.0f32;
    for y in 0..plane.h {
        for x in 1..plane.w {
            let step = (plane.get(x, y) - plane.get(x - 1, y)).abs();
            max_step = max_step.max(step);
        }
    }
    max_step
}
