/// Red mask example
/// Thresholds the red channel and also dumps every single channel

use image_effect::{
    Channel, ImagePlane, PlaneEffect, loader, monochrome_effect::RedMaskConfig,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = loader::load("data/test.png")?;

    let threshold = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u8>().ok())
        .unwrap_or(127);

    let mask = ImagePlane::RedMask(RedMaskConfig::new().with_threshold(threshold)).extract(&img);
    mask.save(output_dir.join("red_mask.png"))?;

    for channel in Channel::ALL {
        let plane = ImagePlane::Channel(channel).extract(&img);
        plane.save(output_dir.join(format!("{channel}_channel.png")))?;
    }

    println!("✓ Red mask (threshold = {threshold}) applied successfully!");
    println!("  Mask:     tmp/red_mask.png");
    println!("  Channels: tmp/red_channel.png tmp/green_channel.png tmp/blue_channel.png");

    Ok(())
}
