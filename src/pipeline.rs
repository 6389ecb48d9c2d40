use anyhow::Result;
use image::DynamicImage;
use tracing::{debug, info};

use crate::detection::{Detector, FoodDetector};
use crate::models::Detection;
use crate::nutrition::{NutritionRecord, NutritionTable};
use crate::summary::{ChartData, NutritionSummary};

/// Everything the presentation shell needs to render one analyzed image.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub detections: Vec<Detection>,
    pub matched: Vec<NutritionRecord>,
    pub summary: NutritionSummary,
    pub summary_text: String,
    pub breakdown: ChartData,
}

/// The detect → match → summarize pipeline.
///
/// Owns its long-lived resources (the loaded detector and nutrition table),
/// both injected at construction and treated as read-only; each call to
/// [`Analyzer::analyze`] is an independent, synchronous request.
pub struct Analyzer<D: Detector = FoodDetector> {
    detector: D,
    table: NutritionTable,
}

impl<D: Detector> Analyzer<D> {
    pub fn new(detector: D, table: NutritionTable) -> Self {
        Self { detector, table }
    }

    pub fn table(&self) -> &NutritionTable {
        &self.table
    }

    /// Run the full pipeline on one decoded image.
    ///
    /// No detections and no table matches are valid outcomes reported as
    /// empty collections, never as errors.
    pub fn analyze(&self, image: &DynamicImage) -> Result<AnalysisReport> {
        let detections = self.detector.detect(image)?;
        debug!(detections = detections.len(), "detection finished");

        let labels: Vec<&str> = detections.iter().map(|d| d.label.as_str()).collect();
        let matched = self.table.match_labels(&labels);

        let summary = NutritionSummary::from_records(&matched);
        let summary_text = summary.text();
        let breakdown = summary.breakdown();
        info!(
            detections = detections.len(),
            matched = matched.len(),
            calories = summary.total_calories,
            "image analyzed"
        );

        Ok(AnalysisReport { detections, matched, summary, summary_text, breakdown })
    }
}
