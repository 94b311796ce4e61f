use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Crops the centered region with the target aspect ratio, then resizes it
/// to `width x height`. The intermediate image is never larger than the source.
pub fn resize_center_crop(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }

    let (src_w, src_h) = (image.width() as u64, image.height() as u64);
    let (dst_w, dst_h) = (width as u64, height as u64);

    // src_w / src_h > dst_w / dst_h: source is wider, keep full height
    let (crop_w, crop_h) = if src_w * dst_h > src_h * dst_w {
        (((src_h * dst_w + dst_h / 2) / dst_h).clamp(1, src_w), src_h)
    } else {
        (src_w, ((src_w * dst_h + dst_w / 2) / dst_w).clamp(1, src_h))
    };

    let x_offset = ((src_w - crop_w) / 2) as u32;
    let y_offset = ((src_h - crop_h) / 2) as u32;
    let cropped = image.crop_imm(x_offset, y_offset, crop_w as u32, crop_h as u32);

    if (cropped.width(), cropped.height()) == (width, height) {
        cropped
    } else {
        cropped.resize_exact(width, height, imageops::FilterType::Triangle)
    }
}

fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let tensor = tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        pixel[c] as f32 / 255.0
    });

    tensor.into_tensor()
}

/// NCHW f32 tensor in [0, 1], the input layout of the classification model.
pub fn resize_image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    let resized = resize_center_crop(image, width, height);
    image_to_tensor(&resized)
}
