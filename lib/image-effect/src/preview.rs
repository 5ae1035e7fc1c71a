//! Canvas previews: BGR to RGB plus an aspect preserving downscale.

use crate::{BgrImage, ImageEffectError, ImageEffectResult};
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image as FastImage,
};
use image::RgbImage;

pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_MAX_HEIGHT: u32 = 600;

/// Size of the preview for a `width x height` image inside a `max_width x max_height` box.
/// Images already inside the box keep their size; nothing is ever upscaled.
/// An empty box gives `(0, 0)`.
pub fn fit_size(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    let w = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (w, h)
}

pub fn fit_to_display(image: &BgrImage, max_width: u32, max_height: u32) -> ImageEffectResult<RgbImage> {
    if max_width == 0 || max_height == 0 {
        return Err(ImageEffectError::InvalidParameter(format!(
            "preview box {max_width}x{max_height} is empty"
        )));
    }

    if image.is_empty() {
        return Err(ImageEffectError::InvalidParameter(format!(
            "can't preview an empty {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let rgb = image.to_rgb();
    let (img_width, img_height) = rgb.dimensions();
    let (scaled_width, scaled_height) = fit_size(img_width, img_height, max_width, max_height);

    if (scaled_width, scaled_height) == (img_width, img_height) {
        return Ok(rgb);
    }

    let fast_image = FastImage::from_vec_u8(img_width, img_height, rgb.into_raw(), PixelType::U8x3)?;
    let mut resized_image = FastImage::new(scaled_width, scaled_height, PixelType::U8x3);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));

    Resizer::new().resize(&fast_image, &mut resized_image, &resize_options)?;

    RgbImage::from_raw(scaled_width, scaled_height, resized_image.into_vec()).ok_or(
        ImageEffectError::InvalidParameter("resized buffer has the wrong size".to_string()),
    )
}
