pub mod bgr_image;
pub mod channel_effect;
pub mod draw_effect;
pub mod loader;
pub mod monochrome_effect;
pub mod preview;
pub mod stylized_effect;

pub use bgr_image::BgrImage;
pub use channel_effect::Channel;
pub use image::{GrayImage, RgbImage};

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Fast image buffer error: {0}")]
    FastImageBuffer(#[from] fast_image_resize::ImageBufferError),
    #[error("Fast image resize error: {0}")]
    FastImageResize(#[from] fast_image_resize::ResizeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// An in-place edit of a BGR image.
pub trait Effect {
    fn apply(&self, image: &mut BgrImage) -> ImageEffectResult<()>;
}

/// Derives a single grayscale plane from a BGR image without touching it.
pub trait PlaneEffect {
    fn extract(&self, image: &BgrImage) -> GrayImage;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Sharpen(stylized_effect::SharpenConfig),
    Line(draw_effect::LineConfig),
}

impl Effect for ImageEffect {
    fn apply(&self, image: &mut BgrImage) -> ImageEffectResult<()> {
        match self {
            ImageEffect::Sharpen(config) => config.apply(image),
            ImageEffect::Line(config) => config.apply(image),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ImagePlane {
    Channel(Channel),
    RedMask(monochrome_effect::RedMaskConfig),
}

impl PlaneEffect for ImagePlane {
    fn extract(&self, image: &BgrImage) -> GrayImage {
        match self {
            ImagePlane::Channel(channel) => channel.extract(image),
            ImagePlane::RedMask(config) => config.extract(image),
        }
    }
}
