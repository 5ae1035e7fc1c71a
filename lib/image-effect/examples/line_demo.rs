/// Line drawing example
/// Draws a thick green line on a copy and a preview that fits 800x600

use image_effect::{
    Effect, ImageEffect, draw_effect::LineConfig, loader, preview,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = loader::load("data/test.png")?;
    let (w, h) = img.dimensions();

    let mut copy = img.clone();
    let line = LineConfig::new((0, 0), (w as i32 - 1, h as i32 - 1)).with_thickness(8);
    ImageEffect::Line(line).apply(&mut copy)?;

    copy.to_rgb().save(output_dir.join("line_effect.png"))?;
    preview::fit_to_display(&copy, 400, 300)?.save(output_dir.join("line_preview.png"))?;

    println!("✓ Line drawn successfully!");
    println!("  Effect:   tmp/line_effect.png");
    println!("  Preview:  tmp/line_preview.png");

    Ok(())
}
