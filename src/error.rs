use std::path::PathBuf;

use thiserror::Error;

/// The detection model artifact or its label table could not be loaded.
/// Raised at construction time, before any request is served.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("invalid model artifact {}: {source}", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: rten::ModelLoadError,
    },

    #[error("failed to read label table {}: {source}", path.display())]
    Labels {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("label table {} contains no labels", path.display())]
    EmptyLabels { path: PathBuf },
}

/// The nutrition table could not be loaded or failed validation.
/// Raised at construction time, before any request is served.
#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("failed to open nutrition table {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed nutrition table {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("nutrition table {}: \"{item}\" has a negative {column} value", path.display())]
    NegativeValue {
        path: PathBuf,
        item: String,
        column: &'static str,
    },

    #[error("nutrition table {}: duplicate item \"{item}\"", path.display())]
    DuplicateItem { path: PathBuf, item: String },
}

/// The uploaded bytes are not a decodable image. Surfaced per-request;
/// never fatal to the process.
#[derive(Debug, Error)]
pub enum ImageDecodeError {
    #[error("failed to open image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}
