use crate::image_classifier::interface::Prediction;
use crate::waste::DisposalPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub top_category: String,
    pub confidence: f32,
    pub disposal: DisposalPolicy,
    pub top_k: Vec<Prediction>,
}
