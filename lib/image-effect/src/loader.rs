//! Two stage image decoding.
//!
//! The first attempt trusts the file extension. When that fails (wrong or
//! missing extension, or a decoder the extension maps to rejects the data)
//! the format is sniffed from the file content instead.

use crate::{BgrImage, ImageEffectError, ImageEffectResult};
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

/// File extensions offered by the open dialog.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

pub fn load(path: impl AsRef<Path>) -> ImageEffectResult<BgrImage> {
    let path = absolute(path.as_ref());

    let primary_err = match image::open(&path) {
        Ok(img) => return Ok(BgrImage::from_dynamic(&img)),
        Err(e) => e,
    };

    log::debug!(
        "decode `{}` by extension failed: {primary_err}. retry with guessed format",
        path.display()
    );

    match decode_guessed(&path) {
        Ok(img) => Ok(BgrImage::from_dynamic(&img)),
        Err(e) => Err(ImageEffectError::Decode(format!(
            "`{}`: {primary_err}; {e}",
            path.display()
        ))),
    }
}

fn decode_guessed(path: &Path) -> ImageEffectResult<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
