//! Utility functions module
//!
//! Window sizing and conversions from `image` buffers to Slint images.

use crate::{AppWindow, config};
use image::{GrayImage, RgbImage};
use slint::{ComponentHandle, LogicalSize, SharedPixelBuffer};

/// Applies the window size stored in the preferences.
pub fn init(ui: &AppWindow) {
    let preference = config::all().preference;
    ui.window().set_size(LogicalSize::new(
        preference.win_width as f32,
        preference.win_height as f32,
    ));
}

pub fn rgb_to_slint(image: &RgbImage) -> slint::Image {
    let buffer = SharedPixelBuffer::<slint::Rgb8Pixel>::clone_from_slice(
        image.as_raw(),
        image.width(),
        image.height(),
    );
    slint::Image::from_rgb8(buffer)
}

/// Gray levels are shown as-is, without a colormap.
pub fn gray_to_slint(image: &GrayImage) -> slint::Image {
    let mut buffer = SharedPixelBuffer::<slint::Rgb8Pixel>::new(image.width(), image.height());

    for (dst, src) in buffer.make_mut_slice().iter_mut().zip(image.as_raw()) {
        *dst = slint::Rgb8Pixel {
            r: *src,
            g: *src,
            b: *src,
        };
    }

    slint::Image::from_rgb8(buffer)
}
