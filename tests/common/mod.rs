mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from nutriscan for tests
pub use nutriscan::{
    AnalysisReport, Analyzer, BoundingBox, ChartData, Detection, Detector, ImageDecodeError,
    NutritionRecord, NutritionSummary, NutritionTable, TableLoadError, summarize,
};
