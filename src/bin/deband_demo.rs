use deband_filter::image::io::{load_rgb_frame, save_frame_png, write_json_file};
use deband_filter::pyramid::PyramidOptions;
use deband_filter::{DebandFilter, DebandParams, PixelFormat};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Pixel format tag of the simulated video path.
    #[serde(default = "default_format")]
    pub format: PixelFormat,
    #[serde(default)]
    pub params: DebandParams,
    #[serde(default)]
    pub pyramid: PyramidOptions,
    pub output: DemoOutputConfig,
}

fn default_format() -> PixelFormat {
    PixelFormat::Nv12
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    #[serde(rename = "trace_json")]
    pub trace_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame = load_rgb_frame(&config.input)?;
    let filter = DebandFilter::new(config.params).with_pyramid_options(config.pyramid);
    let report = filter.process_with_diagnostics(&frame, config.format);

    if let Some(reason) = report.trace.pass_through {
        println!("pass-through ({reason:?}); writing the input unchanged");
    } else {
        println!(
            "debanded {}x{} levels={:?} total_ms={:.3}",
            frame.width(),
            frame.height(),
            report.trace.pyramid.as_ref().map(|p| p.levels()),
            report.trace.timing.total_ms
        );
    }

    save_frame_png(&report.output, &config.output.image)?;
    if let Some(trace_path) = &config.output.trace_json {
        write_json_file(trace_path, &report.trace)?;
    }
    Ok(())
}

fn usage() -> String {
    "Usage: deband_demo <config.json>".to_string()
}
