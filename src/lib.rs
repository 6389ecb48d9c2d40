pub mod detection;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod pipeline;
pub mod summary;

pub use detection::{Annotator, Detector, FoodDetector};
pub use error::{ImageDecodeError, ModelLoadError, TableLoadError};
pub use models::{BoundingBox, Detection};
pub use nutrition::{NutritionRecord, NutritionTable};
pub use pipeline::{AnalysisReport, Analyzer};
pub use summary::{ChartData, ChartSlice, NutritionSummary, summarize};

#[cfg(feature = "gui")]
pub mod gui;
