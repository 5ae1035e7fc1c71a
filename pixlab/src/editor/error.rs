use crate::{config, logic::tr::tr_with};
use image_effect::{ImageEffectError, draw_effect::MAX_THICKNESS};
use std::path::PathBuf;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    #[error("Failed to load `{}`. {source}", .path.display())]
    Load {
        path: PathBuf,
        source: ImageEffectError,
    },

    #[error("Camera capture failed. {0}")]
    Camera(#[from] camera::CameraError),

    #[error("No image loaded. Load an image or take a camera snapshot first")]
    NoImage,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to display the image. {0}")]
    Display(String),

    #[error("Image operation failed. {0}")]
    Effect(ImageEffectError),

    #[error("Another operation is still running")]
    Busy,
}

impl EditorError {
    /// Short, translatable heading for the error dialog.
    pub fn title(&self) -> &'static str {
        match self {
            EditorError::Load { .. } => "Load error",
            EditorError::Camera(_) => "Camera error",
            EditorError::NoImage => "No image",
            EditorError::Validation(_) => "Invalid input",
            EditorError::Display(_) => "Display error",
            EditorError::Effect(_) => "Processing error",
            EditorError::Busy => "Busy",
        }
    }

    /// The error text in the configured UI language.
    pub fn message(&self) -> String {
        self.localized(&config::all().preference.language)
    }

    /// Library errors carried as a cause stay untranslated.
    pub fn localized(&self, lang: &str) -> String {
        let tr = |text: &str| tr_with(text, lang);

        match self {
            EditorError::Load { path, source } => {
                format!("{} `{}`. {source}", tr("Failed to load"), path.display())
            }
            EditorError::Camera(e) => format!("{}. {e}", tr("Camera capture failed")),
            EditorError::NoImage => {
                tr("No image loaded. Load an image or take a camera snapshot first")
            }
            EditorError::Validation(e) => e.localized(lang),
            EditorError::Display(e) => format!("{}. {e}", tr("Failed to display the image")),
            EditorError::Effect(e) => format!("{}. {e}", tr("Image operation failed")),
            EditorError::Busy => tr("Another operation is still running"),
        }
    }
}

/// Rejected line draw input, in the order the fields are checked.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter the line coordinates as `x1 y1 x2 y2`")]
    EmptyCoordinates,

    #[error("Need 4 coordinates (x1 y1 x2 y2), {0}")]
    Coordinates(InputIssue),

    #[error("Line thickness must be a positive integer, {0}")]
    Thickness(InputIssue),

    #[error("Point ({x}, {y}) is outside the image {width}x{height}")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

impl ValidationError {
    pub fn localized(&self, lang: &str) -> String {
        let tr = |text: &str| tr_with(text, lang);

        match self {
            ValidationError::EmptyCoordinates => {
                tr("Enter the line coordinates as `x1 y1 x2 y2`")
            }
            ValidationError::Coordinates(issue) => format!(
                "{}, {}",
                tr("Need 4 coordinates (x1 y1 x2 y2)"),
                issue.localized(lang)
            ),
            ValidationError::Thickness(issue) => format!(
                "{}, {}",
                tr("Line thickness must be a positive integer"),
                issue.localized(lang)
            ),
            ValidationError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => format!(
                "{} ({x}, {y}) {} {width}x{height}",
                tr("Point"),
                tr("is outside the image")
            ),
        }
    }
}

/// What exactly was wrong with a text field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    #[error("the field is empty")]
    Empty,

    #[error("`{0}` is not an integer")]
    NotInteger(String),

    #[error("got {0}")]
    Count(usize),

    #[error("got {0}")]
    NotPositive(i64),

    #[error("at most {max}, got {0}", max = MAX_THICKNESS)]
    TooLarge(i64),
}

impl InputIssue {
    pub fn localized(&self, lang: &str) -> String {
        let tr = |text: &str| tr_with(text, lang);

        match self {
            InputIssue::Empty => tr("the field is empty"),
            InputIssue::NotInteger(token) => format!("`{token}` {}", tr("is not an integer")),
            InputIssue::Count(n) => format!("{} {n}", tr("got")),
            InputIssue::NotPositive(v) => format!("{} {v}", tr("got")),
            InputIssue::TooLarge(v) => {
                format!("{} {MAX_THICKNESS}, {} {v}", tr("at most"), tr("got"))
            }
        }
    }
}
