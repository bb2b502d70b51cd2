use clap::Parser;
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

use solegauge::annotation;
use solegauge::detection::contours;
use solegauge::{MeasureConfig, MeasurePipeline};

#[derive(Parser)]
#[command(name = "solegauge")]
#[command(about = "Measure foot dimensions from a photo with a coin as size reference")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Save the annotated image to this path
    #[arg(long, value_name = "PATH")]
    annotated: Option<PathBuf>,

    /// Save debug outputs to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Known radius of the reference coin in centimetres
    #[arg(long, value_name = "CM", default_value_t = 1.325)]
    reference_radius: f32,

    /// Override the saturation mask floor (0-255)
    #[arg(long, value_name = "N")]
    saturation_floor: Option<u8>,

    /// Override the minimum reference radius in pixels
    #[arg(long, value_name = "PX")]
    min_radius: Option<u32>,

    /// Override the maximum reference radius in pixels
    #[arg(long, value_name = "PX")]
    max_radius: Option<u32>,

    /// Run the two detectors on separate threads
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    // Load image
    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}", img.width(), img.height());
    }

    // Build configuration from CLI overrides
    let mut config = MeasureConfig::new()
        .with_verbose(args.verbose)
        .with_parallel(args.parallel)
        .with_reference_radius(args.reference_radius);
    if let Some(floor) = args.saturation_floor {
        config.saturation_floor = floor;
    }
    if let Some(min) = args.min_radius {
        config.min_radius = min;
    }
    if let Some(max) = args.max_radius {
        config.max_radius = max;
    }

    let pipeline = MeasurePipeline::new(config);

    // Dump stage images before measuring so they survive a failed run
    if let Some(dir) = &args.debug_out {
        prepare_debug_dir(dir)?;
        dump_stage_images(dir, &pipeline, &img)?;
        if args.verbose {
            println!("Stage images written to {:?}", dir);
        }
    }

    let report = pipeline.measure(&img)?;

    // Annotated output: every circle candidate plus the selected foot box
    if args.annotated.is_some() || args.debug_out.is_some() {
        let pre = pipeline.preprocess(&img)?;
        let circles = pipeline.reference_candidates(&img)?;
        let annotated = annotation::annotate(&pre.smoothed, &circles, Some(&report.foot));

        if let Some(path) = &args.annotated {
            annotated.save(path)?;
            if args.verbose {
                println!("Annotated image written to {:?}", path);
            }
        }
        if let Some(dir) = &args.debug_out {
            annotated.save(dir.join("05-annotated.png"))?;
        }
    }

    // Print results
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n=== Reference Measurement ===");
        println!("Radius in image:       {} px", report.reference.radius);
        println!("Known radius:          {} cm", report.reference_radius_cm);
        println!("Centimetres per pixel: {:.5}", report.scale.cm_per_pixel);

        println!("\n=== Foot Measurement ===");
        println!(
            "Foot length: {} px = {:.2} cm",
            report.foot.height, report.measurement.length_cm
        );
        println!(
            "Foot width:  {} px = {:.2} cm",
            report.foot.width, report.measurement.width_cm
        );
    }

    Ok(())
}

/// The debug directory must be empty or non-existent.
fn prepare_debug_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.exists() {
        let entries = std::fs::read_dir(dir)?;
        if entries.count() > 0 {
            return Err(anyhow::anyhow!(
                "Debug directory is not empty: {}",
                dir.display()
            ));
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Save each preprocessing stage as a numbered PNG.
fn dump_stage_images(
    dir: &Path,
    pipeline: &MeasurePipeline,
    img: &DynamicImage,
) -> anyhow::Result<()> {
    let pre = pipeline.preprocess(img)?;
    pre.smoothed.save(dir.join("01-smoothed.png"))?;
    pre.mask.save(dir.join("02-saturation-mask.png"))?;

    let edges = contours::edge_map(&pre.mask, &pipeline.config);
    edges.save(dir.join("03-mask-edges.png"))?;
    pre.gray.save(dir.join("04-grayscale.png"))?;

    Ok(())
}
