use super::decode::{decode_base64, decode_image};
use super::main::ClassificationService;
use super::result::ClassificationResult;
use crate::error::ClassifyError;
use crate::waste::lookup;
use image::DynamicImage;
use std::path::Path;

impl ClassificationService {
    pub fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifyError> {
        self.run_classifier(image)
            .inspect_err(|e| self.log_failure(e))
    }

    fn run_classifier(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifyError> {
        let image_classifier = self
            .image_classifier
            .as_ref()
            .ok_or(ClassifyError::ModelUnavailable)?;

        let predictions = image_classifier
            .classify(image)
            .map_err(ClassifyError::Inference)?;

        let top = predictions.first().ok_or(ClassifyError::EmptyPrediction)?;
        let disposal = lookup(&top.label);

        let _ = self.logger.info(&format!(
            "Classified as {} ({:.1}%) -> {} / {} bin",
            top.label,
            top.confidence * 100.0,
            disposal.action,
            disposal.bin_color
        ));

        Ok(ClassificationResult {
            top_category: top.label.clone(),
            confidence: top.confidence,
            disposal,
            top_k: predictions.iter().take(self.top_k).cloned().collect(),
        })
    }

    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<ClassificationResult, ClassifyError> {
        let image = decode_image(bytes).inspect_err(|e| self.log_failure(e))?;
        self.classify(&image)
    }

    pub fn classify_base64(&self, payload: &str) -> Result<ClassificationResult, ClassifyError> {
        let bytes = decode_base64(payload).inspect_err(|e| self.log_failure(e))?;
        self.classify_bytes(&bytes)
    }

    pub fn classify_file(&self, path: &Path) -> Result<ClassificationResult, ClassifyError> {
        let bytes = std::fs::read(path)
            .map_err(|source| ClassifyError::ReadImage {
                path: path.to_path_buf(),
                source,
            })
            .inspect_err(|e| self.log_failure(e))?;
        self.classify_bytes(&bytes)
    }

    fn log_failure(&self, error: &ClassifyError) {
        let _ = self.logger.error(&format!("Classification failed: {}", error));
    }
}
