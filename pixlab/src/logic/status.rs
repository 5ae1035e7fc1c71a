//! Status line and message dialogs
//!
//! Every finished action updates the status line under the canvas and
//! pops up a native message box. Success boxes can be turned off with
//! `editor.success_dialog`.

use super::tr::tr;
use crate::{AppWindow, config, global_store};
use native_dialog::{DialogBuilder, MessageLevel};
use slint::ComponentHandle;

/// Macro to report a successful action
///
/// # Parameters
/// - `$ui`: AppWindow instance
/// - `$msg`: Success message
#[macro_export]
macro_rules! status_success {
    ($ui:expr, $msg:expr) => {
        $crate::logic::status::success(&$ui, &format!("{}", $msg))
    };
}

/// Macro to report a failed action
///
/// # Parameters
/// - `$ui`: AppWindow instance
/// - `$title`: Short dialog heading
/// - `$msg`: Error message
#[macro_export]
macro_rules! status_error {
    ($ui:expr, $title:expr, $msg:expr) => {
        $crate::logic::status::error(&$ui, &format!("{}", $title), &format!("{}", $msg))
    };
}

pub fn init(ui: &AppWindow) {
    set_status(ui, &tr("Ready"), false);
}

pub fn success(ui: &AppWindow, msg: &str) {
    set_status(ui, msg, false);

    if config::all().editor.success_dialog {
        show_dialog(MessageLevel::Info, &tr("Success"), msg);
    }
}

pub fn error(ui: &AppWindow, title: &str, msg: &str) {
    set_status(ui, msg, true);
    show_dialog(MessageLevel::Error, title, msg);
}

fn set_status(ui: &AppWindow, msg: &str, is_error: bool) {
    global_store!(ui).set_status_text(msg.into());
    global_store!(ui).set_status_is_error(is_error);
}

/// Blocks until the user dismisses the box.
pub fn show_dialog(level: MessageLevel, title: &str, msg: &str) {
    if let Err(e) = DialogBuilder::message()
        .set_level(level)
        .set_title(title)
        .set_text(msg)
        .alert()
        .show()
    {
        log::warn!("show message dialog failed: {e}");
    }
}
