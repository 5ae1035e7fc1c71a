//! Editor panel callbacks
//!
//! Turns button presses into editor commands and presents the outcome:
//! canvas previews go to the main window, grayscale results open a plot
//! window, and every outcome ends up in the status line.

use super::{plot, tr::tr, util::rgb_to_slint};
use crate::{
    AppWindow, config,
    editor::{
        Command, DeviceCamera, Editor, EditorError, EditorResult, PreviewBox, Presentation, Report,
    },
    global_store, logic_cb, status_error, status_success,
};
use image_effect::{Channel, loader::SUPPORTED_EXTENSIONS};
use slint::{ComponentHandle, SharedString};
use std::path::{Path, PathBuf};

thread_local! {
    static EDITOR: Editor = {
        let conf = config::all().editor;
        Editor::new(
            DeviceCamera {
                index: conf.camera_index,
            },
            PreviewBox {
                max_width: conf.preview_max_width,
                max_height: conf.preview_max_height,
            },
        )
    };
}

pub fn init(ui: &AppWindow) {
    global_store!(ui).set_threshold(config::all().editor.default_threshold as f32);

    logic_cb!(load_image, ui);
    logic_cb!(capture_camera, ui);
    logic_cb!(show_channel, ui, index);
    logic_cb!(apply_red_mask, ui, threshold);
    logic_cb!(sharpen_image, ui);
    logic_cb!(draw_line, ui, coords, thickness);
}

fn load_image(ui: &AppWindow) {
    let Some(path) = picker_image(ui) else {
        return;
    };

    if run(ui, Command::Load(path.clone())) {
        remember_dir(&path);
    }
}

fn capture_camera(ui: &AppWindow) {
    run(ui, Command::Capture);
}

fn show_channel(ui: &AppWindow, index: i32) {
    let channel = usize::try_from(index)
        .ok()
        .and_then(|i| Channel::ALL.get(i).copied())
        .unwrap_or_default();

    run(ui, Command::ExtractChannel(channel));
}

fn apply_red_mask(ui: &AppWindow, threshold: i32) {
    run(ui, Command::Mask(threshold.clamp(0, 255) as u8));
}

fn sharpen_image(ui: &AppWindow) {
    run(ui, Command::Sharpen);
}

fn draw_line(ui: &AppWindow, coords: SharedString, thickness: SharedString) {
    run(
        ui,
        Command::DrawLine {
            coords: coords.to_string(),
            thickness: thickness.to_string(),
        },
    );
}

/// Returns `true` when the command succeeded and its result was shown.
fn run(ui: &AppWindow, command: Command) -> bool {
    EDITOR.with(|editor| {
        editor.dispatch_with(
            command,
            |presentation| show(ui, presentation),
            |result| notify(ui, result),
        )
    })
}

fn show(ui: &AppWindow, presentation: &Presentation) -> EditorResult<()> {
    match presentation {
        Presentation::Canvas(preview) => {
            global_store!(ui).set_canvas_image(rgb_to_slint(preview));
            global_store!(ui).set_canvas_width(preview.width() as i32);
            global_store!(ui).set_canvas_height(preview.height() as i32);
            Ok(())
        }
        Presentation::Plot { title, image } => {
            plot::show(title, image).map_err(|e| EditorError::Display(e.to_string()))
        }
    }
}

fn notify(ui: &AppWindow, result: EditorResult<Report>) -> bool {
    global_store!(ui).set_processing(true);

    let ok = match result {
        Ok(report) => {
            status_success!(ui, report.message);
            true
        }
        Err(e) => {
            status_error!(ui, tr(e.title()), e.message());
            false
        }
    };

    global_store!(ui).set_processing(false);
    ok
}

fn picker_image(ui: &AppWindow) -> Option<PathBuf> {
    let last_dir = config::all().editor.last_dir;

    let mut file_dialog = native_dialog::DialogBuilder::file()
        .set_title(tr("Choose an image"))
        .add_filter(tr("Image files"), &SUPPORTED_EXTENSIONS);

    if !last_dir.is_empty() && Path::new(&last_dir).is_dir() {
        file_dialog = file_dialog.set_location(&last_dir);
    }

    match file_dialog.open_single_file().show() {
        Ok(Some(path)) => Some(path),
        Err(e) => {
            status_error!(
                ui,
                tr("Error"),
                format!("{}. {}: {}", tr("Choose file failed"), tr("Reason"), e)
            );
            None
        }
        _ => None,
    }
}

fn remember_dir(path: &Path) {
    let Some(dir) = path.parent() else {
        return;
    };

    let mut all = config::all();
    all.editor.last_dir = dir.to_string_lossy().to_string();

    if let Err(e) = config::save(all) {
        log::warn!("save last directory failed: {e:?}");
    }
}
