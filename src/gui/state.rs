use image::RgbImage;

use crate::pipeline::AnalysisReport;

/// One analyzed image ready for display.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub annotated: RgbImage,
    pub report: AnalysisReport,
}

/// What the window is currently showing.
#[derive(Debug, Clone, Default)]
pub enum AppState {
    /// Nothing uploaded yet.
    #[default]
    Idle,
    /// Dialog open or pipeline running.
    Working,
    Ready(Analysis),
    Failed(String),
}
