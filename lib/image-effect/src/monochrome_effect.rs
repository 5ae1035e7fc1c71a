use crate::{BgrImage, Channel, PlaneEffect};
use image::{GrayImage, Luma};

/// Binary mask of the red channel: 255 where red > threshold, 0 elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedMaskConfig {
    pub threshold: u8,
}

impl Default for RedMaskConfig {
    fn default() -> Self {
        Self { threshold: 127 }
    }
}

impl RedMaskConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }
}

impl PlaneEffect for RedMaskConfig {
    fn extract(&self, image: &BgrImage) -> GrayImage {
        let red = Channel::Red.bgr_index();
        GrayImage::from_fn(image.width(), image.height(), |x, y| {
            if image.get_pixel(x, y)[red] > self.threshold {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }
}
