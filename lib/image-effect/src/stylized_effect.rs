use crate::{BgrImage, Effect, ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;

/// Sharpen effect configuration (3x3 convolution, borders reflected
/// without repeating the edge pixel).
///
/// The kernel is identity plus `amount` times an 8-neighbour Laplacian:
///
/// ```text
/// -a   -a   -a
/// -a  1+8a  -a
/// -a   -a   -a
/// ```
///
/// With the default `amount = 1.0` this is the classic `[-1 -1 -1; -1 9 -1; -1 -1 -1]`.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SharpenConfig {
    #[derivative(Default(value = "1.0"))]
    amount: f32,
}

impl SharpenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kernel(&self) -> [f32; 9] {
        let a = self.amount;
        [-a, -a, -a, -a, 1.0 + 8.0 * a, -a, -a, -a, -a]
    }
}

impl Effect for SharpenConfig {
    fn apply(&self, image: &mut BgrImage) -> ImageEffectResult<()> {
        if !self.amount.is_finite() {
            return Err(ImageEffectError::InvalidParameter(format!(
                "sharpen amount must be finite, got {}",
                self.amount
            )));
        }

        if image.is_empty() {
            return Ok(());
        }

        let kernel = self.kernel();
        let (width, height) = image.dimensions();
        let source = image.buffer().clone();
        let target = image.buffer_mut();

        for y in 0..height {
            for x in 0..width {
                let mut sum = [0.0f32; 3];

                for ky in -1i64..=1 {
                    for kx in -1i64..=1 {
                        let px = reflect_101(x as i64 + kx, width);
                        let py = reflect_101(y as i64 + ky, height);
                        let pixel = source.get_pixel(px, py);

                        let k = kernel[((ky + 1) * 3 + (kx + 1)) as usize];
                        for (acc, value) in sum.iter_mut().zip(pixel.0) {
                            *acc += value as f32 * k;
                        }
                    }
                }

                let pixel = target.get_pixel_mut(x, y);
                for (channel, acc) in pixel.0.iter_mut().zip(sum) {
                    *channel = acc.round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        Ok(())
    }
}

// gfedcb|abcdefgh|gfedcba
fn reflect_101(index: i64, len: u32) -> u32 {
    let len = len as i64;
    if len == 1 {
        return 0;
    }

    let index = if index < 0 { -index } else { index };
    let index = if index >= len {
        2 * (len - 1) - index
    } else {
        index
    };

    index.clamp(0, len - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> BgrImage {
        BgrImage::from_fn(9, 9, |x, y| {
            if (x, y) == (4, 4) {
                [100, 100, 100]
            } else {
                [50, 60, 70]
            }
        })
    }

    #[test]
    fn test_kernel_sums_to_one() {
        let sum: f32 = SharpenConfig::new().kernel().iter().sum();
        assert_eq!(sum, 1.0);
        assert_eq!(SharpenConfig::new().kernel()[4], 9.0);
    }

    #[test]
    fn test_flat_image_is_unchanged() -> anyhow::Result<()> {
        let flat = BgrImage::from_fn(13, 7, |_, _| [12, 200, 99]);
        let mut img = flat.clone();
        SharpenConfig::new().apply(&mut img)?;

        assert_eq!(img, flat);
        Ok(())
    }

    #[test]
    fn test_sharpen_is_not_idempotent() -> anyhow::Result<()> {
        let mut once = spot();
        SharpenConfig::new().apply(&mut once)?;

        let mut twice = once.clone();
        SharpenConfig::new().apply(&mut twice)?;

        assert_ne!(once, spot());
        assert_ne!(once, twice);
        Ok(())
    }

    #[test]
    fn test_spot_response_is_saturated() -> anyhow::Result<()> {
        let mut img = spot();
        SharpenConfig::new().apply(&mut img)?;

        // 9 * 100 - 8 * 50 on the blue plane
        assert_eq!(img.get_pixel(4, 4)[0], 255);
        // 9 * 50 - 7 * 50 - 100
        assert_eq!(img.get_pixel(3, 4)[0], 0);
        assert_eq!(img.get_pixel(0, 0), [50, 60, 70]);
        Ok(())
    }

    #[test]
    fn test_tiny_images() -> anyhow::Result<()> {
        let mut single = BgrImage::from_fn(1, 1, |_, _| [1, 2, 3]);
        SharpenConfig::new().apply(&mut single)?;
        assert_eq!(single.get_pixel(0, 0), [1, 2, 3]);

        let mut empty = BgrImage::new(0, 0);
        SharpenConfig::new().apply(&mut empty)?;
        assert!(empty.is_empty());
        Ok(())
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(0, 5), 0);
        assert_eq!(reflect_101(4, 5), 4);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(-1, 1), 0);
        assert_eq!(reflect_101(2, 2), 0);
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        let mut img = spot();
        let result = SharpenConfig::new().with_amount(f32::NAN).apply(&mut img);

        assert!(matches!(result, Err(ImageEffectError::InvalidParameter(_))));
        assert_eq!(img, spot());
    }
}
