use raster_filters::raster::io::{load_rgb_image, save_rgb_image, write_json_file};
use raster_filters::{box_blur, sobel_edges};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub blur: BlurConfig,
    #[serde(default)]
    pub sobel: SobelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    /// Number of box-blur passes; 0 leaves the image untouched.
    pub iterations: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SobelConfig {
    /// Run Sobel edge detection after the blur stage.
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    #[serde(default, rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterSummary {
    width: usize,
    height: usize,
    blur_iterations: i32,
    sobel: bool,
    blur_ms: f64,
    sobel_ms: f64,
}

pub fn load_config(path: &Path) -> Result<FilterToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_rgb_image(&config.input)?;
    let (width, height) = (input.w, input.h);

    let blur_start = Instant::now();
    let blurred = box_blur(input, config.blur.iterations);
    let blur_ms = blur_start.elapsed().as_secs_f64() * 1000.0;

    let sobel_start = Instant::now();
    let result = if config.sobel.enabled {
        sobel_edges(&blurred)
    } else {
        blurred
    };
    let sobel_ms = sobel_start.elapsed().as_secs_f64() * 1000.0;

    save_rgb_image(&result, &config.output.image)?;
    println!(
        "Saved {}x{} result to {} (blur x{}, sobel={})",
        width,
        height,
        config.output.image.display(),
        config.blur.iterations.max(0),
        config.sobel.enabled
    );

    if let Some(summary_path) = &config.output.summary_json {
        let summary = FilterSummary {
            width,
            height,
            blur_iterations: config.blur.iterations.max(0),
            sobel: config.sobel.enabled,
            blur_ms,
            sobel_ms,
        };
        write_json_file(summary_path, &summary)?;
        println!("Saved run summary to {}", summary_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: filter_demo <config.json>".to_string()
}
