//! Three channel 8-bit raster in B, G, R byte order.
//!
//! The `image` crate has no BGR pixel type, so the samples are kept in an
//! `ImageBuffer<Rgb<u8>>` whose subpixels are read as `[b, g, r]`. Conversions
//! to and from real RGB images go through [`BgrImage::from_rgb`] and
//! [`BgrImage::to_rgb`].

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

pub(crate) type BgrBuffer = ImageBuffer<Rgb<u8>, Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    buffer: BgrBuffer,
}

impl BgrImage {
    /// A black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: BgrBuffer::new(width, height),
        }
    }

    /// Builds an image from a closure returning `[b, g, r]` for each pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        Self {
            buffer: BgrBuffer::from_fn(width, height, |x, y| Rgb(f(x, y))),
        }
    }

    /// Wraps raw samples already laid out as `b, g, r, b, g, r, ...`.
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        BgrBuffer::from_raw(width, height, samples).map(|buffer| Self { buffer })
    }

    pub fn from_rgb(rgb: &RgbImage) -> Self {
        Self::from_fn(rgb.width(), rgb.height(), |x, y| {
            let [r, g, b] = rgb.get_pixel(x, y).0;
            [b, g, r]
        })
    }

    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::from_rgb(&image.to_rgb8())
    }

    pub fn to_rgb(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let [b, g, r] = self.buffer.get_pixel(x, y).0;
            Rgb([r, g, b])
        })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// `true` when `(x, y)` addresses a pixel of this image.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width() as i64).contains(&x) && (0..self.height() as i64).contains(&y)
    }

    /// Returns `[b, g, r]`. Panics when out of bounds, like `ImageBuffer`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.buffer.get_pixel(x, y).0
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, bgr: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(bgr));
    }

    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.buffer.into_raw()
    }

    pub(crate) fn buffer(&self) -> &BgrBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut BgrBuffer {
        &mut self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion_swaps_red_and_blue() {
        let rgb = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        let bgr = BgrImage::from_rgb(&rgb);

        assert_eq!(bgr.get_pixel(0, 0), [30, 20, 10]);
        assert_eq!(bgr.as_raw(), &[30, 20, 10, 30, 20, 10]);
        assert_eq!(bgr.to_rgb(), rgb);
    }

    #[test]
    fn test_contains() {
        let img = BgrImage::new(4, 3);

        assert!(img.contains(0, 0));
        assert!(img.contains(3, 2));
        assert!(!img.contains(4, 0));
        assert!(!img.contains(0, 3));
        assert!(!img.contains(-1, 1));
    }

    #[test]
    fn test_from_raw_rejects_short_buffer() {
        assert!(BgrImage::from_raw(2, 2, vec![0; 11]).is_none());
        assert!(BgrImage::from_raw(2, 2, vec![0; 12]).is_some());
    }
}
