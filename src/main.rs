use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutriscan::detection::preprocessing::open_image;
use nutriscan::detection::{Annotator, FoodDetector};
use nutriscan::nutrition::NutritionTable;
use nutriscan::pipeline::Analyzer;

#[derive(Parser)]
#[command(name = "nutriscan")]
#[command(about = "Detect food items in a photo and summarize their nutrition")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Path to the pre-trained detection model artifact
    #[arg(long, value_name = "FILE", default_value = "models/food-detect.rten")]
    model: PathBuf,

    /// Path to the model's label table (one class name per line)
    #[arg(long, value_name = "FILE", default_value = "models/food-detect.names")]
    labels: PathBuf,

    /// Path to the nutrition lookup table
    #[arg(long, value_name = "FILE", default_value = "data/nutrition_lookup.csv")]
    table: PathBuf,

    /// Font used for box labels on the annotated image
    #[arg(
        long,
        value_name = "FILE",
        default_value = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
    )]
    font: PathBuf,

    /// Where to write the annotated image
    #[arg(short, long, value_name = "FILE", default_value = "annotated.png")]
    output: PathBuf,

    /// Minimum detection confidence
    #[arg(long, value_name = "SCORE")]
    min_confidence: Option<f32>,

    /// Launch the desktop shell instead of the one-shot CLI
    #[cfg(feature = "gui")]
    #[arg(long)]
    gui: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "nutriscan=debug" } else { "nutriscan=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Long-lived resources, loaded once and read-only afterwards. A missing
    // model or a bad table is fatal here, before any image is touched.
    let mut detector = FoodDetector::load(&args.model, &args.labels)?;
    if let Some(threshold) = args.min_confidence {
        detector = detector.with_confidence_threshold(threshold);
    }
    let table = NutritionTable::load(&args.table)?;
    let annotator = Annotator::load(&args.font)?;
    let analyzer = Analyzer::new(detector, table);

    #[cfg(feature = "gui")]
    if args.gui {
        return nutriscan::gui::run(analyzer, annotator);
    }

    let Some(image_path) = args.image_path else {
        anyhow::bail!("no input image given (pass IMAGE, or --gui with the gui feature)");
    };

    let img = open_image(&image_path)?;
    let report = analyzer.analyze(&img)?;

    if report.detections.is_empty() {
        println!("No food items detected.");
        return Ok(());
    }

    let annotated = annotator.annotate(&img, &report.detections);
    annotated
        .save(&args.output)
        .map_err(|e| anyhow::anyhow!("failed to save annotated image: {e}"))?;
    println!("Annotated image written to {}", args.output.display());

    println!("\nDetected items:");
    for detection in &report.detections {
        let bb = &detection.bounding_box;
        println!(
            "  {} ({:.2}) at ({:.0}, {:.0})",
            detection.label, detection.confidence, bb.x_min, bb.y_min
        );
    }

    if report.matched.is_empty() {
        println!("\nNo nutrition information found for detected items.");
        return Ok(());
    }

    println!("\n=== Nutrition Summary ===");
    println!("{}", report.summary_text);

    if !report.breakdown.is_empty() {
        println!("\nMacronutrient distribution:");
        for slice in &report.breakdown.slices {
            println!("  {}: {:.1} g ({:.1}%)", slice.label, slice.grams, slice.percent);
        }
    }

    Ok(())
}
