use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    /// Label vocabulary in model output order.
    fn labels(&self) -> &[String];

    /// Ranked predictions over every label, highest confidence first.
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Prediction>, Box<dyn std::error::Error + Send + Sync>>;
}
