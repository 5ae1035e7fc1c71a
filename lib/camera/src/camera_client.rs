use crate::{CameraError, CameraResult};
use image::RgbImage;
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{CameraIndex, RequestedFormat, RequestedFormatType},
};

/// An opened camera stream. The stream is closed when the client is dropped.
pub struct CameraClient {
    index: u32,
    camera: Camera,
}

impl CameraClient {
    pub fn open(index: u32) -> CameraResult<Self> {
        let format = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

        let camera = Camera::new(CameraIndex::Index(index), format).map_err(|e| {
            CameraError::OpenError {
                index,
                reason: e.to_string(),
            }
        })?;

        // From here on `Drop` owns the cleanup.
        let mut client = Self { index, camera };
        client
            .camera
            .open_stream()
            .map_err(|e| CameraError::StartError {
                index,
                reason: e.to_string(),
            })?;

        log::debug!("camera {index} opened");
        Ok(client)
    }

    /// Blocks until the device delivers the next frame.
    pub fn frame(&mut self) -> CameraResult<RgbImage> {
        let buffer = self.camera.frame()?;
        let frame = buffer.decode_image::<RgbFormat>()?;

        if frame.is_empty() {
            return Err(CameraError::NoFrameAvailable);
        }

        Ok(frame)
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.camera.is_stream_open()
    }
}

impl Drop for CameraClient {
    fn drop(&mut self) {
        if self.is_running()
            && let Err(e) = self.camera.stop_stream()
        {
            log::warn!("stop camera {} failed: {e}", self.index);
        }

        log::debug!("camera {} released", self.index);
    }
}

/// Opens camera `index`, reads exactly one frame and releases the device,
/// whether or not the read succeeded.
pub fn capture_frame(index: u32) -> CameraResult<RgbImage> {
    let mut client = CameraClient::open(index)?;
    client.frame()
}
