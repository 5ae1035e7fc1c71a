use camera::{CameraResult, capture_frame};

fn main() -> CameraResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    camera::init();

    let index = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0);

    log::info!("Capturing one frame from camera {index}...");

    let frame = capture_frame(index)?;
    log::info!("Frame: {}x{}", frame.width(), frame.height());

    if let Err(e) = std::fs::create_dir_all("tmp").and_then(|_| {
        frame
            .save("tmp/camera-frame.png")
            .map_err(std::io::Error::other)
    }) {
        log::warn!("save frame failed: {e}");
    }

    Ok(())
}
