use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::ranking::rank;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("image_classifier").with_namespace("tract_onnx");
        let (height, width) = config.input_shape;

        logger.info(&format!(
            "Loading model {} ({}x{})",
            config.onnx_model_path.display(),
            width,
            height
        ))?;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
            .into_optimized()?
            .into_runnable()?;

        logger.info("Model loaded")?;

        Ok(Self {
            model,
            config,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn labels(&self) -> &[String] {
        &self.config.labels
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(image, width, height);

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;

        // [1, num_classes] for classification heads
        let scores: Vec<f32> = output.iter().copied().collect();

        let predictions = rank(&self.config.labels, &scores)?;

        if let Some(top) = predictions.first() {
            self.logger
                .info(&format!("Top prediction {} ({:.3})", top.label, top.confidence))?;
        }

        Ok(predictions)
    }
}
