use crate::error::ClassifyError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;

const DATA_URL_MARKER: &str = "base64,";

/// Drops a `data:image/...;base64,` header if present.
pub fn strip_data_url(payload: &str) -> &str {
    match payload.split_once(DATA_URL_MARKER) {
        Some((_, data)) => data,
        None => payload,
    }
}

/// Accepts line-wrapped payloads such as the 76-column output of `base64`.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, ClassifyError> {
    let data: String = strip_data_url(payload.trim())
        .split_ascii_whitespace()
        .collect();
    if data.is_empty() {
        return Err(ClassifyError::EmptyImage);
    }

    Ok(STANDARD.decode(data)?)
}

/// Decodes any format `image` understands and normalizes it to RGB.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ClassifyError> {
    if bytes.is_empty() {
        return Err(ClassifyError::EmptyImage);
    }

    let image = image::load_from_memory(bytes)?;
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}
