use image::{Rgb, RgbImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("data")?;

    // 800x600 gradient with a bright square, enough structure for every effect
    let img = RgbImage::from_fn(800, 600, |x, y| {
        if (300..500).contains(&x) && (200..400).contains(&y) {
            return Rgb([240, 40, 40]);
        }

        let r = (x * 255 / 800) as u8;
        let g = (y * 255 / 600) as u8;
        let b = ((x + y) * 255 / 1400) as u8;
        Rgb([r, g, b])
    });

    img.save("data/test.png")?;
    println!("Created data/test.png");
    Ok(())
}
