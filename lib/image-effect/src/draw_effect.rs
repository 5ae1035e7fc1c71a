use crate::{BgrImage, Effect, ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

/// Largest accepted stroke width, same limit as common vision libraries.
pub const MAX_THICKNESS: u32 = 32767;

/// Straight line segment with round caps.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct LineConfig {
    pub start: (i32, i32),

    pub end: (i32, i32),

    /// `[b, g, r]`
    #[derivative(Default(value = "[0, 255, 0]"))]
    pub color: [u8; 3],

    #[derivative(Default(value = "1"))]
    pub thickness: u32,
}

impl LineConfig {
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }
}

impl Effect for LineConfig {
    fn apply(&self, image: &mut BgrImage) -> ImageEffectResult<()> {
        if self.thickness == 0 || self.thickness > MAX_THICKNESS {
            return Err(ImageEffectError::InvalidParameter(format!(
                "line thickness must be in 1..={MAX_THICKNESS}, got {}",
                self.thickness
            )));
        }

        let color = Rgb(self.color);
        let start = (self.start.0 as f32, self.start.1 as f32);
        let end = (self.end.0 as f32, self.end.1 as f32);
        let canvas = image.buffer_mut();

        if self.thickness == 1 {
            draw_line_segment_mut(canvas, start, end, color);
            return Ok(());
        }

        fill_capsule(canvas, self.start, self.end, self.thickness as f64 / 2.0, color);
        Ok(())
    }
}

/// Paints every pixel whose center lies within `radius` of the segment
/// `start..end`. Only pixels inside the image are visited.
fn fill_capsule(
    canvas: &mut RgbImage,
    start: (i32, i32),
    end: (i32, i32),
    radius: f64,
    color: Rgb<u8>,
) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let (sx, sy) = (start.0 as f64, start.1 as f64);
    let (dx, dy) = (end.0 as f64 - sx, end.1 as f64 - sy);

    let x_min = (sx.min(sx + dx) - radius).floor().max(0.0);
    let x_max = (sx.max(sx + dx) + radius).ceil().min((width - 1) as f64);
    let y_min = (sy.min(sy + dy) - radius).floor().max(0.0);
    let y_max = (sy.max(sy + dy) + radius).ceil().min((height - 1) as f64);

    if x_min > x_max || y_min > y_max {
        return;
    }

    let len_sq = dx * dx + dy * dy;
    let radius_sq = radius * radius;

    for y in y_min as u32..=y_max as u32 {
        for x in x_min as u32..=x_max as u32 {
            let (px, py) = (x as f64 - sx, y as f64 - sy);
            let t = if len_sq == 0.0 {
                0.0
            } else {
                ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
            };

            let (ox, oy) = (px - t * dx, py - t * dy);
            if ox * ox + oy * oy <= radius_sq {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}
