//! Color channel extraction

use crate::{BgrImage, PlaneEffect};
use image::{GrayImage, Luma};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel inside a BGR pixel.
    pub fn bgr_index(self) -> usize {
        match self {
            Channel::Blue => 0,
            Channel::Green => 1,
            Channel::Red => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Title of the plot window showing this channel, e.g. `Red Channel`.
    pub fn title(self) -> &'static str {
        match self {
            Channel::Red => "Red Channel",
            Channel::Green => "Green Channel",
            Channel::Blue => "Blue Channel",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" | "r" => Ok(Channel::Red),
            "green" | "g" => Ok(Channel::Green),
            "blue" | "b" => Ok(Channel::Blue),
            other => Err(format!("unknown channel `{other}`")),
        }
    }
}

impl PlaneEffect for Channel {
    fn extract(&self, image: &BgrImage) -> GrayImage {
        let index = self.bgr_index();
        GrayImage::from_fn(image.width(), image.height(), |x, y| {
            Luma([image.get_pixel(x, y)[index]])
        })
    }
}
