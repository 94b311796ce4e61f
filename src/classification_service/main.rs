use crate::config::Config;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Decodes inputs, runs the classifier and resolves disposal policies.
///
/// A service without a classifier is degraded: it still answers health
/// checks but every classification fails with `ModelUnavailable`.
#[derive(Clone)]
pub struct ClassificationService {
    pub image_classifier: Option<Arc<dyn ImageClassifier + Send + Sync>>,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub top_k: usize,
}

impl ClassificationService {
    pub fn new(
        image_classifier: Option<Arc<dyn ImageClassifier + Send + Sync>>,
        logger: Arc<dyn Logger + Send + Sync>,
        top_k: usize,
    ) -> Self {
        Self {
            image_classifier,
            logger: logger.with_namespace("classification_service"),
            top_k,
        }
    }

    /// Loads the ONNX model named in `config`. A load failure is logged and
    /// leaves the service degraded instead of aborting startup.
    pub fn from_config(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let image_classifier: Option<Arc<dyn ImageClassifier + Send + Sync>> =
            match ImageClassifierTractOnnx::new(config.model_config(), logger.clone()) {
                Ok(classifier) => {
                    let _ = logger.info(&format!(
                        "Classifier ready, labels: {}",
                        classifier.labels().join(", ")
                    ));
                    Some(Arc::new(classifier))
                }
                Err(e) => {
                    let _ = logger.error(&format!(
                        "Failed to load model {}: {}",
                        config.model_path.display(),
                        e
                    ));
                    None
                }
            };

        Self::new(image_classifier, logger, config.top_k)
    }

    pub fn model_loaded(&self) -> bool {
        self.image_classifier.is_some()
    }
}
