//! Error types for intellisort

use std::path::PathBuf;
use thiserror::Error;

/// Whether a failure came from the caller's input or from the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Adapter,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("No image provided")]
    EmptyImage,

    #[error("Invalid base64 image data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid image: {0}")]
    InvalidImage(#[from] image::ImageError),

    #[error("Failed to read image {}: {source}", .path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model not loaded")]
    ModelUnavailable,

    #[error("Inference failed: {0}")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Classifier returned no predictions")]
    EmptyPrediction,
}

impl ClassifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifyError::EmptyImage
            | ClassifyError::InvalidBase64(_)
            | ClassifyError::InvalidImage(_)
            | ClassifyError::ReadImage { .. } => ErrorKind::Input,
            ClassifyError::ModelUnavailable
            | ClassifyError::Inference(_)
            | ClassifyError::EmptyPrediction => ErrorKind::Adapter,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
