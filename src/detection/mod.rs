pub mod annotate;
mod postprocess;
pub mod preprocessing;

use std::fs;
use std::path::Path;

use anyhow::Context;
use image::DynamicImage;
use rten::Model;
use rten_tensor::{AsView, Layout, NdTensor};
use tracing::debug;

use crate::error::ModelLoadError;
use crate::models::Detection;

pub use annotate::Annotator;

/// Side length of the square model input.
pub const DEFAULT_INPUT_SIZE: u32 = 640;
/// Default confidence threshold, matching the exporter's own default.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.25;

const IOU_THRESHOLD: f32 = 0.45;

/// Object detection capability: pixel grid in, detections out.
///
/// A single production implementation ([`FoodDetector`]) calls into the
/// inference runtime; tests substitute stubs so the rest of the pipeline
/// runs without a model artifact.
pub trait Detector {
    fn detect(&self, image: &DynamicImage) -> anyhow::Result<Vec<Detection>>;
}

/// Food detector backed by a pre-trained `.rten` object detection model.
///
/// The model artifact and its label table are loaded once at construction
/// and reused for every request; loading is the expensive part and never
/// happens per image.
pub struct FoodDetector {
    model: Model,
    labels: Vec<String>,
    input_size: u32,
    confidence_threshold: f32,
}

impl FoodDetector {
    /// Load the model artifact and its label table (one class name per
    /// line). Fails if either file is missing or unusable.
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self, ModelLoadError> {
        let model = Model::load_file(model_path).map_err(|source| ModelLoadError::Model {
            path: model_path.to_path_buf(),
            source,
        })?;

        let raw = fs::read_to_string(labels_path).map_err(|source| ModelLoadError::Labels {
            path: labels_path.to_path_buf(),
            source,
        })?;
        let labels: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if labels.is_empty() {
            return Err(ModelLoadError::EmptyLabels { path: labels_path.to_path_buf() });
        }

        debug!(model = %model_path.display(), labels = labels.len(), "loaded detection model");
        Ok(Self {
            model,
            labels,
            input_size: DEFAULT_INPUT_SIZE,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        })
    }

    /// Override the confidence threshold below which detections are dropped.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    fn label_for(&self, class_id: usize) -> String {
        self.labels
            .get(class_id)
            .cloned()
            .unwrap_or_else(|| format!("class_{class_id}"))
    }
}

impl Detector for FoodDetector {
    fn detect(&self, image: &DynamicImage) -> anyhow::Result<Vec<Detection>> {
        let (input, params) = preprocessing::letterbox_to_tensor(image, self.input_size);

        let output = self
            .model
            .run_one(input.view().into(), None)
            .context("model inference failed")?;
        let output: NdTensor<f32, 3> = output
            .try_into()
            .map_err(|_| anyhow::anyhow!("unexpected model output type"))?;

        let [_, rows, cols] = output.shape();
        if cols < 6 {
            anyhow::bail!("model output has {cols} columns per row, expected at least 6");
        }
        debug!(rows, cols, "decoding model output");

        let data: Vec<f32> = output.iter().copied().collect();
        let candidates =
            postprocess::decode_rows(data.chunks_exact(cols), params, self.confidence_threshold);
        let kept = postprocess::nms(candidates, IOU_THRESHOLD);
        debug!(detections = kept.len(), "inference complete");

        Ok(kept
            .into_iter()
            .map(|c| Detection {
                bounding_box: c.bbox,
                label: self.label_for(c.class_id),
                confidence: c.confidence,
            })
            .collect())
    }
}
