/// Sharpen effect example
/// Demonstrates the fixed 3x3 sharpen kernel

use image_effect::{Effect, ImageEffect, loader, stylized_effect::SharpenConfig};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let mut img = loader::load("data/test.png")?;

    let effect = ImageEffect::Sharpen(SharpenConfig::new());
    effect.apply(&mut img)?;

    img.to_rgb().save(output_dir.join("sharpen_effect.png"))?;

    println!("✓ Sharpen effect applied successfully!");
    println!("  Effect:   tmp/sharpen_effect.png");

    Ok(())
}
