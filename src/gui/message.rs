use std::path::PathBuf;

use super::state::Analysis;

#[derive(Debug, Clone)]
pub enum Message {
    OpenImage,
    ImagePicked(Option<PathBuf>),
    AnalysisFinished(Result<Analysis, String>),
}
