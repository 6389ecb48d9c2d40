use std::io::Write;

use anyhow::Result;
use image::{DynamicImage, ImageBuffer, Rgb};
use tempfile::NamedTempFile;

use nutriscan::detection::Detector;
use nutriscan::models::{BoundingBox, Detection};
use nutriscan::nutrition::{NutritionRecord, NutritionTable};

/// Detector stub returning a fixed list of labels, so pipeline tests run
/// without a model artifact or filesystem access.
pub struct StubDetector {
    pub labels: Vec<&'static str>,
}

impl Detector for StubDetector {
    fn detect(&self, _image: &DynamicImage) -> anyhow::Result<Vec<Detection>> {
        Ok(self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| Detection {
                bounding_box: BoundingBox {
                    x_min: 10.0 * i as f32,
                    y_min: 5.0,
                    x_max: 10.0 * i as f32 + 40.0,
                    y_max: 60.0,
                },
                label: (*label).to_string(),
                confidence: 0.9,
            })
            .collect())
    }
}

pub fn record(name: &str, calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64) -> NutritionRecord {
    NutritionRecord {
        item_name: name.to_string(),
        calories,
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// The two-row reference table: apple and rice.
pub fn sample_records() -> Vec<NutritionRecord> {
    vec![record("apple", 52.0, 0.3, 0.2, 14.0), record("rice", 130.0, 2.7, 0.3, 28.0)]
}

pub fn sample_table() -> NutritionTable {
    NutritionTable::from_records(sample_records())
}

/// CSV source for the same two-row reference table.
pub const TABLE_CSV: &str =
    "item_name,calories,protein_g,fat_g,carbs_g\napple,52,0.3,0.2,14\nrice,130,2.7,0.3,28\n";

/// Write CSV content to a temp file (keep the handle alive while loading).
pub fn write_table(contents: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Creates a 100x100 red test image, stand-in for an uploaded photo.
pub fn test_image() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(100, 100, |_, _| Rgb([200u8, 40u8, 40u8])))
}
