//! Editor session and command dispatch
//!
//! Everything here is independent of the UI: the Slint callbacks in
//! `logic::editor` turn button presses into [`Command`]s and hand them to
//! [`Editor::dispatch_with`] together with the code that shows a [`Report`].
//!
//! Edit semantics:
//! - load, capture and sharpen replace the session image
//! - channel view, red mask and line draw never modify it
//! - a command either fully succeeds or leaves the session image untouched,
//!   the canvas preview is computed before anything is committed

mod error;
mod line_input;

pub use error::{EditorError, EditorResult, InputIssue, ValidationError};
pub use line_input::LineInput;

use crate::logic::tr::tr;
use camera::CameraResult;
use image_effect::{
    BgrImage, Channel, Effect, GrayImage, ImageEffect, ImagePlane, PlaneEffect, RgbImage, loader,
    monochrome_effect::RedMaskConfig, preview, stylized_effect::SharpenConfig,
};
use std::{
    cell::{Cell, Ref, RefCell},
    path::PathBuf,
};

/// Source of single camera frames.
pub trait FrameGrabber {
    fn grab(&mut self) -> CameraResult<RgbImage>;
}

/// The physical camera: opened, read once and released on every grab.
#[derive(Debug, Clone, Default)]
pub struct DeviceCamera {
    pub index: u32,
}

impl FrameGrabber for DeviceCamera {
    fn grab(&mut self) -> CameraResult<RgbImage> {
        camera::init();
        camera::capture_frame(self.index)
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    Load(PathBuf),
    Capture,
    ExtractChannel(Channel),
    Mask(u8),
    Sharpen,
    DrawLine { coords: String, thickness: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Load(_) => "load",
            Command::Capture => "capture",
            Command::ExtractChannel(_) => "extract-channel",
            Command::Mask(_) => "mask",
            Command::Sharpen => "sharpen",
            Command::DrawLine { .. } => "draw-line",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Presentation {
    /// RGB preview for the main canvas, already fitted to the preview box.
    Canvas(RgbImage),
    /// Grayscale raster for a new plot window.
    Plot { title: String, image: GrayImage },
}

#[derive(Debug, Clone)]
pub struct Report {
    pub presentation: Presentation,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewBox {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for PreviewBox {
    fn default() -> Self {
        Self {
            max_width: preview::DEFAULT_MAX_WIDTH,
            max_height: preview::DEFAULT_MAX_HEIGHT,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    image: Option<BgrImage>,
    status: String,
}

impl Session {
    pub fn image(&self) -> Option<&BgrImage> {
        self.image.as_ref()
    }

    /// Last human readable outcome.
    pub fn status(&self) -> &str {
        &self.status
    }

    fn require_image(&self) -> EditorResult<&BgrImage> {
        self.image.as_ref().ok_or(EditorError::NoImage)
    }
}

/// Clears the busy flag when dropped.
pub struct BusyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct Editor<G: FrameGrabber = DeviceCamera> {
    session: RefCell<Session>,
    processing: Cell<bool>,
    grabber: RefCell<G>,
    preview_box: Cell<PreviewBox>,
}

impl<G: FrameGrabber> Editor<G> {
    pub fn new(grabber: G, preview_box: PreviewBox) -> Self {
        Self {
            session: RefCell::new(Session::default()),
            processing: Cell::new(false),
            grabber: RefCell::new(grabber),
            preview_box: Cell::new(preview_box),
        }
    }

    pub fn session(&self) -> Ref<'_, Session> {
        self.session.borrow()
    }

    pub fn is_busy(&self) -> bool {
        self.processing.get()
    }

    pub fn set_preview_box(&self, preview_box: PreviewBox) {
        self.preview_box.set(preview_box);
    }

    /// Idle -> Busy. Fails with [`EditorError::Busy`] if already busy.
    pub fn begin(&self) -> EditorResult<BusyGuard<'_>> {
        if self.processing.replace(true) {
            return Err(EditorError::Busy);
        }

        Ok(BusyGuard {
            flag: &self.processing,
        })
    }

    pub fn dispatch(&self, command: Command) -> EditorResult<Report> {
        self.dispatch_with(command, |_| Ok(()), |result| result)
    }

    /// Runs `command`, lets `show` put a successful result on screen and
    /// hands the final outcome to `notify`, all while the editor is busy.
    ///
    /// A failing `show` turns the outcome into that error, so the session
    /// status always matches what `notify` receives. A rejected command is
    /// notified as [`EditorError::Busy`] without touching the session.
    pub fn dispatch_with<R>(
        &self,
        command: Command,
        show: impl FnOnce(&Presentation) -> EditorResult<()>,
        notify: impl FnOnce(EditorResult<Report>) -> R,
    ) -> R {
        let _guard = match self.begin() {
            Ok(guard) => guard,
            Err(e) => {
                log::warn!("{} rejected: {e}", command.name());
                return notify(Err(e));
            }
        };

        let result = self
            .run(&command)
            .and_then(|report| show(&report.presentation).map(|_| report));

        {
            let mut session = self.session.borrow_mut();
            match &result {
                Ok(report) => {
                    log::info!("{}: {}", command.name(), report.message);
                    session.status = report.message.clone();
                }
                Err(e) => {
                    log::warn!("{} failed: {e}", command.name());
                    session.status = e.message();
                }
            }
        }

        notify(result)
    }

    fn run(&self, command: &Command) -> EditorResult<Report> {
        match command {
            Command::Load(path) => {
                let image = loader::load(path).map_err(|source| EditorError::Load {
                    path: path.clone(),
                    source,
                })?;

                self.replace_image(
                    image,
                    format!("{}: {}", tr("Image loaded"), path.display()),
                )
            }
            Command::Capture => {
                let frame = self.grabber.borrow_mut().grab()?;
                self.replace_image(BgrImage::from_rgb(&frame), tr("Camera snapshot taken"))
            }
            Command::ExtractChannel(channel) => {
                let plane = self.extract(&ImagePlane::Channel(*channel))?;
                Ok(Report {
                    presentation: Presentation::Plot {
                        title: tr(channel.title()),
                        image: plane,
                    },
                    message: format!("{}: {}", tr("Channel shown"), tr(channel.name())),
                })
            }
            Command::Mask(threshold) => {
                let config = RedMaskConfig::new().with_threshold(*threshold);
                let mask = self.extract(&ImagePlane::RedMask(config))?;
                Ok(Report {
                    presentation: Presentation::Plot {
                        title: tr("Red Mask"),
                        image: mask,
                    },
                    message: format!("{}: {threshold}", tr("Red mask applied, threshold")),
                })
            }
            Command::Sharpen => {
                let mut image = self.session.borrow().require_image()?.clone();
                ImageEffect::Sharpen(SharpenConfig::new())
                    .apply(&mut image)
                    .map_err(EditorError::Effect)?;

                self.replace_image(image, tr("Image sharpened"))
            }
            Command::DrawLine { coords, thickness } => {
                let mut copy = self.session.borrow().require_image()?.clone();

                let input = LineInput::parse(coords, thickness)?;
                input.check_bounds(copy.width(), copy.height())?;

                ImageEffect::Line(input.to_config())
                    .apply(&mut copy)
                    .map_err(EditorError::Effect)?;

                Ok(Report {
                    presentation: Presentation::Canvas(self.preview(&copy)?),
                    message: tr("Line drawn"),
                })
            }
        }
    }

    fn extract(&self, plane: &ImagePlane) -> EditorResult<GrayImage> {
        let session = self.session.borrow();
        Ok(plane.extract(session.require_image()?))
    }

    fn preview(&self, image: &BgrImage) -> EditorResult<RgbImage> {
        let PreviewBox {
            max_width,
            max_height,
        } = self.preview_box.get();

        preview::fit_to_display(image, max_width, max_height)
            .map_err(|e| EditorError::Display(e.to_string()))
    }

    /// Commits `image` as the session image once its preview exists.
    fn replace_image(&self, image: BgrImage, message: String) -> EditorResult<Report> {
        let preview = self.preview(&image)?;
        self.session.borrow_mut().image = Some(image);

        Ok(Report {
            presentation: Presentation::Canvas(preview),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camera::CameraError;
    use image::Rgb;

    struct FakeCamera {
        frame: Option<RgbImage>,
        grabs: usize,
    }

    impl FakeCamera {
        fn with_frame(frame: RgbImage) -> Self {
            Self {
                frame: Some(frame),
                grabs: 0,
            }
        }

        fn broken() -> Self {
            Self {
                frame: None,
                grabs: 0,
            }
        }
    }

    impl FrameGrabber for FakeCamera {
        fn grab(&mut self) -> CameraResult<RgbImage> {
            self.grabs += 1;
            self.frame.clone().ok_or(CameraError::NoFrameAvailable)
        }
    }

    fn frame(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 2) as u8, (y * 2) as u8, ((x + y) % 256) as u8])
        })
    }

    fn editor_with_frame(width: u32, height: u32) -> Editor<FakeCamera> {
        let editor = Editor::new(FakeCamera::with_frame(frame(width, height)), PreviewBox::default());
        editor.dispatch(Command::Capture).unwrap();
        editor
    }

    fn current_image<G: FrameGrabber>(editor: &Editor<G>) -> BgrImage {
        editor.session().image().cloned().unwrap()
    }

    fn draw_line(coords: &str, thickness: &str) -> Command {
        Command::DrawLine {
            coords: coords.to_string(),
            thickness: thickness.to_string(),
        }
    }

    #[test]
    fn test_commands_need_an_image() {
        let editor = Editor::new(FakeCamera::broken(), PreviewBox::default());

        for command in [
            Command::ExtractChannel(Channel::Red),
            Command::Mask(10),
            Command::Sharpen,
            draw_line("0 0 1 1", "1"),
        ] {
            assert!(matches!(editor.dispatch(command), Err(EditorError::NoImage)));
        }
        assert!(editor.session().image().is_none());
    }

    #[test]
    fn test_no_image_is_reported_before_validation() {
        let editor = Editor::new(FakeCamera::broken(), PreviewBox::default());
        assert!(matches!(
            editor.dispatch(draw_line("", "")),
            Err(EditorError::NoImage)
        ));
    }

    #[test]
    fn test_capture_replaces_image() -> anyhow::Result<()> {
        let editor = Editor::new(FakeCamera::with_frame(frame(30, 20)), PreviewBox::default());
        let report = editor.dispatch(Command::Capture)?;

        let Presentation::Canvas(preview) = report.presentation else {
            panic!("capture must show the canvas");
        };
        assert_eq!(preview, frame(30, 20));
        assert_eq!(current_image(&editor).to_rgb(), frame(30, 20));
        assert_eq!(editor.grabber.borrow().grabs, 1);
        Ok(())
    }

    #[test]
    fn test_camera_failure_keeps_image() -> anyhow::Result<()> {
        let editor = editor_with_frame(10, 10);
        let before = current_image(&editor);

        editor.grabber.borrow_mut().frame = None;
        assert!(matches!(
            editor.dispatch(Command::Capture),
            Err(EditorError::Camera(_))
        ));
        assert_eq!(current_image(&editor), before);
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("photo.png");
        frame(12, 8).save(&path)?;

        let editor = Editor::new(FakeCamera::broken(), PreviewBox::default());
        let report = editor.dispatch(Command::Load(path))?;

        assert!(matches!(report.presentation, Presentation::Canvas(_)));
        assert_eq!(current_image(&editor).dimensions(), (12, 8));
        assert_eq!(editor.session().status(), report.message);
        Ok(())
    }

    #[test]
    fn test_load_failure_keeps_image() {
        let editor = editor_with_frame(10, 10);
        let before = current_image(&editor);

        let result = editor.dispatch(Command::Load(PathBuf::from("/no/such/picture.png")));

        assert!(matches!(result, Err(EditorError::Load { .. })));
        assert_eq!(current_image(&editor), before);
    }

    #[test]
    fn test_extract_channel_plots_without_touching_image() -> anyhow::Result<()> {
        let editor = editor_with_frame(16, 9);
        let before = current_image(&editor);

        let report = editor.dispatch(Command::ExtractChannel(Channel::Green))?;
        let Presentation::Plot { title, image } = report.presentation else {
            panic!("channel view must open a plot");
        };

        assert_eq!(title, "Green Channel");
        assert_eq!(image.dimensions(), (16, 9));
        assert_eq!(image.get_pixel(3, 4)[0], 8);
        assert_eq!(current_image(&editor), before);
        Ok(())
    }

    #[test]
    fn test_mask_plots_binary_image() -> anyhow::Result<()> {
        let editor = editor_with_frame(16, 16);

        let report = editor.dispatch(Command::Mask(20))?;
        let Presentation::Plot { title, image } = report.presentation else {
            panic!("mask must open a plot");
        };

        assert_eq!(title, "Red Mask");
        for (x, _, px) in image.enumerate_pixels() {
            let expected = if x * 2 > 20 { 255 } else { 0 };
            assert_eq!(px[0], expected);
        }
        Ok(())
    }

    #[test]
    fn test_sharpen_persists_into_session() -> anyhow::Result<()> {
        let editor = editor_with_frame(20, 20);
        let before = current_image(&editor);

        editor.dispatch(Command::Sharpen)?;
        let once = current_image(&editor);

        let mut expected = before.clone();
        SharpenConfig::new().apply(&mut expected)?;
        assert_eq!(once, expected);

        editor.dispatch(Command::Sharpen)?;
        assert_ne!(current_image(&editor), once);
        Ok(())
    }

    #[test]
    fn test_draw_line_keeps_original() -> anyhow::Result<()> {
        let editor = Editor::new(
            FakeCamera::with_frame(RgbImage::from_pixel(100, 100, Rgb([200, 10, 10]))),
            PreviewBox::default(),
        );
        editor.dispatch(Command::Capture)?;
        let before = current_image(&editor);

        let report = editor.dispatch(draw_line("0 0 10 10", "2"))?;
        let Presentation::Canvas(preview) = report.presentation else {
            panic!("line draw must show the canvas");
        };

        assert_eq!(preview.get_pixel(5, 5).0, [0, 255, 0]);
        assert_eq!(preview.get_pixel(50, 50).0, [200, 10, 10]);
        assert_eq!(current_image(&editor).get_pixel(50, 50), [10, 10, 200]);
        assert_eq!(current_image(&editor), before);
        Ok(())
    }

    #[test]
    fn test_draw_line_validation() {
        let editor = editor_with_frame(100, 100);
        let before = current_image(&editor);

        let err = editor.dispatch(draw_line("10 10 50", "2")).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::Coordinates(_))
        ));
        assert!(err.to_string().to_lowercase().contains("need 4 coordinates"));

        assert!(matches!(
            editor.dispatch(draw_line("100 0 10 10", "2")),
            Err(EditorError::Validation(ValidationError::OutOfBounds { x: 100, .. }))
        ));

        for thickness in ["0", "-1", ""] {
            assert!(matches!(
                editor.dispatch(draw_line("0 0 10 10", thickness)),
                Err(EditorError::Validation(ValidationError::Thickness(_)))
            ));
        }

        assert!(matches!(
            editor.dispatch(draw_line(" ", "2")),
            Err(EditorError::Validation(ValidationError::EmptyCoordinates))
        ));

        assert_eq!(current_image(&editor), before);
    }

    #[test]
    fn test_busy_rejects_without_changing_state() -> anyhow::Result<()> {
        let editor = editor_with_frame(10, 10);
        let before = current_image(&editor);
        let status = editor.session().status().to_string();

        {
            let _guard = editor.begin()?;
            assert!(editor.is_busy());

            for command in [Command::Sharpen, Command::Capture, Command::Mask(0)] {
                assert!(matches!(editor.dispatch(command), Err(EditorError::Busy)));
            }
            assert!(matches!(editor.begin(), Err(EditorError::Busy)));

            assert_eq!(current_image(&editor), before);
            assert_eq!(editor.session().status(), status);
            assert_eq!(editor.grabber.borrow().grabs, 1);
        }

        assert!(!editor.is_busy());
        editor.dispatch(Command::Sharpen)?;
        assert_ne!(current_image(&editor), before);
        Ok(())
    }

    #[test]
    fn test_presenting_keeps_editor_busy() {
        let editor = editor_with_frame(10, 10);

        let nested = editor.dispatch_with(
            Command::Sharpen,
            |_| {
                assert!(editor.is_busy());
                Ok(())
            },
            |result| {
                assert!(result.is_ok());
                assert!(editor.is_busy());
                editor.dispatch(Command::Capture)
            },
        );

        assert!(matches!(nested, Err(EditorError::Busy)));
        assert!(!editor.is_busy());
        assert_eq!(editor.grabber.borrow().grabs, 1);
    }

    #[test]
    fn test_show_failure_becomes_the_outcome() {
        let editor = editor_with_frame(10, 10);
        let before = current_image(&editor);

        let result = editor.dispatch_with(
            Command::ExtractChannel(Channel::Red),
            |_| Err(EditorError::Display("no window".to_string())),
            |result| result,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, EditorError::Display(_)));
        assert_eq!(editor.session().status(), err.message());
        assert_eq!(current_image(&editor), before);
        assert!(!editor.is_busy());
    }

    #[test]
    fn test_show_is_skipped_for_failed_commands() {
        let editor = Editor::new(FakeCamera::broken(), PreviewBox::default());

        let result = editor.dispatch_with(
            Command::Sharpen,
            |_| panic!("nothing to show"),
            |result| result,
        );

        assert!(matches!(result, Err(EditorError::NoImage)));
        assert_eq!(editor.session().status(), EditorError::NoImage.message());
    }

    #[test]
    fn test_busy_flag_released_after_failure() {
        let editor = Editor::new(FakeCamera::broken(), PreviewBox::default());

        assert!(editor.dispatch(Command::Capture).is_err());
        assert!(!editor.is_busy());
        assert!(editor.dispatch(Command::Sharpen).is_err());
        assert!(!editor.is_busy());
    }

    #[test]
    fn test_display_failure_keeps_image() -> anyhow::Result<()> {
        let editor = editor_with_frame(10, 10);
        let before = current_image(&editor);

        editor.set_preview_box(PreviewBox {
            max_width: 0,
            max_height: 0,
        });

        assert!(matches!(
            editor.dispatch(Command::Sharpen),
            Err(EditorError::Display(_))
        ));
        assert!(matches!(
            editor.dispatch(Command::Capture),
            Err(EditorError::Display(_))
        ));
        assert_eq!(current_image(&editor), before);
        Ok(())
    }

    #[test]
    fn test_display_failure_on_first_load_leaves_no_image() {
        let editor = Editor::new(
            FakeCamera::with_frame(frame(4, 4)),
            PreviewBox {
                max_width: 800,
                max_height: 0,
            },
        );

        assert!(matches!(
            editor.dispatch(Command::Capture),
            Err(EditorError::Display(_))
        ));
        assert!(editor.session().image().is_none());
    }

    #[test]
    fn test_preview_is_downscaled_but_image_is_not() -> anyhow::Result<()> {
        let editor = Editor::new(FakeCamera::with_frame(frame(1600, 900)), PreviewBox::default());

        let report = editor.dispatch(Command::Capture)?;
        let Presentation::Canvas(preview) = report.presentation else {
            panic!("capture must show the canvas");
        };

        assert_eq!(preview.dimensions(), (800, 450));
        assert_eq!(current_image(&editor).dimensions(), (1600, 900));
        Ok(())
    }

    #[test]
    fn test_status_tracks_last_outcome() {
        let editor = editor_with_frame(10, 10);
        assert!(!editor.session().status().is_empty());

        let err = editor.dispatch(draw_line("1 2", "1")).unwrap_err();
        assert_eq!(editor.session().status(), err.message());

        let report = editor.dispatch(Command::Mask(5)).unwrap();
        assert_eq!(editor.session().status(), report.message);
    }
}
