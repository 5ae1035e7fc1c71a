use super::error::{InputIssue, ValidationError};
use image_effect::draw_effect::{LineConfig, MAX_THICKNESS};

/// Line draw request parsed from the two text fields of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInput {
    pub start: (i64, i64),
    pub end: (i64, i64),
    pub thickness: u32,
}

impl LineInput {
    /// Parses `x1 y1 x2 y2` and the thickness. Checks run in a fixed order:
    /// empty coordinates, coordinate count, thickness.
    pub fn parse(coords: &str, thickness: &str) -> Result<Self, ValidationError> {
        let tokens = coords.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() {
            return Err(ValidationError::EmptyCoordinates);
        }

        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token.parse::<i64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    return Err(ValidationError::Coordinates(InputIssue::NotInteger(
                        token.to_string(),
                    )));
                }
            }
        }

        let [x1, y1, x2, y2] = values[..] else {
            return Err(ValidationError::Coordinates(InputIssue::Count(values.len())));
        };

        Ok(Self {
            start: (x1, y1),
            end: (x2, y2),
            thickness: parse_thickness(thickness)?,
        })
    }

    /// Every coordinate must lie in `[0, width) x [0, height)`.
    pub fn check_bounds(&self, width: u32, height: u32) -> Result<(), ValidationError> {
        for (x, y) in [self.start, self.end] {
            if !(0..width as i64).contains(&x) || !(0..height as i64).contains(&y) {
                return Err(ValidationError::OutOfBounds {
                    x,
                    y,
                    width,
                    height,
                });
            }
        }

        Ok(())
    }

    /// Only meaningful after [`LineInput::check_bounds`] succeeded.
    pub fn to_config(&self) -> LineConfig {
        let point = |(x, y): (i64, i64)| {
            (
                i32::try_from(x).unwrap_or(i32::MAX),
                i32::try_from(y).unwrap_or(i32::MAX),
            )
        };

        LineConfig::new(point(self.start), point(self.end)).with_thickness(self.thickness)
    }
}

fn parse_thickness(text: &str) -> Result<u32, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Thickness(InputIssue::Empty));
    }

    let value = text
        .parse::<i64>()
        .map_err(|_| ValidationError::Thickness(InputIssue::NotInteger(text.to_string())))?;

    if value <= 0 {
        return Err(ValidationError::Thickness(InputIssue::NotPositive(value)));
    }

    if value > MAX_THICKNESS as i64 {
        return Err(ValidationError::Thickness(InputIssue::TooLarge(value)));
    }

    Ok(value as u32)
}
