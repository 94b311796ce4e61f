use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub labels: Vec<String>,
}
