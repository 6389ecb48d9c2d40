mod app;
mod chart;
mod message;
mod state;

pub use app::NutriscanApp;
pub use message::Message;
pub use state::{Analysis, AppState};

use std::sync::Arc;

use iced::{Application, Settings};

use crate::detection::{Annotator, FoodDetector};
use crate::pipeline::Analyzer;

/// Everything the window needs, loaded before launch so startup failures
/// surface before a window ever opens.
pub struct AppFlags {
    pub analyzer: Arc<Analyzer<FoodDetector>>,
    pub annotator: Arc<Annotator>,
}

/// Launch the desktop shell with an already-loaded pipeline.
pub fn run(analyzer: Analyzer<FoodDetector>, annotator: Annotator) -> anyhow::Result<()> {
    let flags = AppFlags {
        analyzer: Arc::new(analyzer),
        annotator: Arc::new(annotator),
    };
    NutriscanApp::run(Settings::with_flags(flags))
        .map_err(|e| anyhow::anyhow!("gui shell failed: {e}"))
}
