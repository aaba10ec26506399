//! frame-fx - apply the effect chain to image files.
//!
//! Every input is treated as one frame; frames are processed in parallel.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use frame_fx::effect::brightness::BrightnessMode;
use frame_fx::effect::saturation::SaturationMode;
use frame_fx::{OwnedFrame, Parameters, Pipeline, image_io};

#[derive(Parser)]
#[command(name = "frame-fx")]
#[command(author, version, about = "Apply brightness, contrast, saturation and noise distortion to images")]
struct Cli {
    /// Input images (each one is a frame)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Suffix appended to each output file stem
    #[arg(long, default_value = "_fx")]
    suffix: String,

    /// Signed brightness delta
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    brightness: i16,

    /// Contrast (0 = neutral)
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    contrast: f64,

    /// Saturation scale (-1 = gray, 0 = neutral)
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    saturation: f64,

    /// Noise distortion amount in pixels
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    distortion: f64,

    /// Brightness strategy: additive or planar
    #[arg(long, default_value = "additive")]
    brightness_mode: BrightnessMode,

    /// Saturation strategy: luma or hsv
    #[arg(long, default_value = "luma")]
    saturation_mode: SaturationMode,

    /// Fit every input into a WIDTHxHEIGHT frame (letterboxed)
    #[arg(long, value_parser = parse_size)]
    size: Option<(u32, u32)>,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

fn output_path(input: &Path, out_dir: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("input has no file name: {}", input.display()))?;
    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("png");
    Ok(out_dir.join(format!("{}{suffix}.{ext}", stem.to_string_lossy())))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let params = Parameters {
        brightness: cli.brightness,
        contrast: cli.contrast,
        saturation: cli.saturation,
        distortion: cli.distortion,
    };
    log::debug!("{params:?}");
    if params.is_neutral() {
        log::warn!("All parameters are neutral, outputs will match inputs");
    }

    if !cli.out_dir.is_dir() {
        bail!("output directory does not exist: {}", cli.out_dir.display());
    }

    let mut frames: Vec<OwnedFrame> = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        let img = image_io::load_image(path)?;
        let rgb = match cli.size {
            Some((w, h)) => image_io::fit_to_frame(&img, w, h),
            None => img.to_rgb8(),
        };
        frames.push(image_io::to_bgr_frame(&rgb).with_context(|| format!("converting {}", path.display()))?);
    }

    let pipeline = Pipeline::new()
        .with_brightness(cli.brightness_mode)
        .with_saturation(cli.saturation_mode);

    let start = web_time::Instant::now();
    pipeline.process_frames(&mut frames, &params);
    log::info!(
        "Applied effects to {} frame(s) in {:.1}ms",
        frames.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    for (path, frame) in cli.inputs.iter().zip(&frames) {
        let out = output_path(path, &cli.out_dir, &cli.suffix)?;
        let img = image_io::from_bgr_frame(frame)?;
        image_io::save_image(&img, &out)?;
        log::info!("Wrote {}", out.display());
    }

    Ok(())
}
