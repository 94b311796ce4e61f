use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::image_classifier::ranking::rank;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

enum Behavior {
    /// Scores drawn from an rng seeded with the image pixels.
    Seeded,
    Fixed(Vec<f32>),
    Fail(String),
}

pub struct ImageClassifierFake {
    labels: Vec<String>,
    behavior: Behavior,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(labels: Vec<String>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            labels,
            behavior: Behavior::Seeded,
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }

    pub fn with_scores(
        labels: Vec<String>,
        scores: Vec<f32>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            behavior: Behavior::Fixed(scores),
            ..Self::new(labels, logger)
        }
    }

    pub fn failing(
        labels: Vec<String>,
        message: &str,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            behavior: Behavior::Fail(message.to_string()),
            ..Self::new(labels, logger)
        }
    }

    fn seeded_scores(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let mut hasher = DefaultHasher::new();
        image.width().hash(&mut hasher);
        image.height().hash(&mut hasher);
        image.to_rgb8().as_raw().hash(&mut hasher);

        let mut rng = StdRng::seed_from_u64(hasher.finish());
        let score_dist = Uniform::new(-4.0f32, 4.0f32)?;

        Ok(self
            .labels
            .iter()
            .map(|_| score_dist.sample(&mut rng))
            .collect())
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Classifying image with fake classifier...")?;

        let scores = match &self.behavior {
            Behavior::Seeded => self.seeded_scores(image)?,
            Behavior::Fixed(scores) => scores.clone(),
            Behavior::Fail(message) => return Err(message.clone().into()),
        };

        rank(&self.labels, &scores)
    }
}
