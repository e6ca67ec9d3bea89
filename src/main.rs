use deband_filter::image::FrameF32;
use deband_filter::{DebandFilter, DebandParams, PixelFormat};

fn main() {
    // Demo stub: runs the filter over a synthetic flat frame
    let frame = FrameF32::new(640, 480, 3);
    let filter = DebandFilter::new(DebandParams::default());
    let report = filter.process_with_diagnostics(&frame, PixelFormat::Nv12);
    println!(
        "levels={:?} steps={:?} total_ms={:.3}",
        report.trace.pyramid.as_ref().map(|p| p.levels()),
        report.trace.deband.as_ref().map(|d| d.steps),
        report.trace.timing.total_ms
    );
}
