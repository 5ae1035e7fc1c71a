pub mod camera_client;

pub use camera_client::{CameraClient, capture_frame};
pub use image::RgbImage;

pub type CameraResult<T> = Result<T, CameraError>;

#[derive(thiserror::Error, Debug)]
pub enum CameraError {
    #[error("Failed to open camera {index}: {reason}")]
    OpenError { index: u32, reason: String },

    #[error("Failed to start camera {index}: {reason}")]
    StartError { index: u32, reason: String },

    #[error("No frame available")]
    NoFrameAvailable,

    #[error("Camera error: {0}")]
    NokhwaError(#[from] nokhwa::NokhwaError),
}

pub fn init() {
    #[cfg(target_os = "macos")]
    nokhwa::nokhwa_initialize(|granted| {
        log::info!("User said {} for nokhwa", granted);
    });
}
