//! UI logic and callback management module
//!
//! Contains macros and initialization functions for connecting Slint UI callbacks
//! to Rust functions.

use crate::AppWindow;

mod about;
mod editor;
mod plot;
mod status;
mod util;

pub(crate) mod tr;

/// Macro to access the global Store component
///
/// # Parameters
/// - `$ui`: AppWindow instance
///
/// # Returns
/// - Reference to the global Store component
#[macro_export]
macro_rules! global_store {
    ($ui:expr) => {
        $ui.global::<crate::Store>()
    };
}

/// Macro to access the global Logic component
///
/// # Parameters
/// - `$ui`: AppWindow instance
///
/// # Returns
/// - Reference to the global Logic component
#[macro_export]
macro_rules! global_logic {
    ($ui:expr) => {
        $ui.global::<crate::Logic>()
    };
}

/// Macro to connect Slint callbacks to Rust functions
///
/// Creates a callback connection with proper weak reference handling
/// to prevent memory leaks.
///
/// # Parameters
/// - `$callback_name`: Name of the callback function
/// - `$ui`: AppWindow instance
/// - `$($arg:ident),*`: Callback arguments
#[macro_export]
macro_rules! logic_cb {
    ($callback_name:ident, $ui:expr, $($arg:ident),*) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move |$($arg),*| {
                        $callback_name(&ui_weak.unwrap(), $($arg),*)
                    });
            }
        }}
    };
    ($callback_name:ident, $ui:expr) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move || {
                        $callback_name(&ui_weak.unwrap())
                    });
            }
        }}
    };
}

/// Initializes all UI logic modules
///
/// # Parameters
/// - `ui`: Reference to the application window
pub fn init(ui: &AppWindow) {
    tr::init(ui);
    util::init(ui);
    about::init(ui);
    status::init(ui);
    editor::init(ui);
}

/// Shows an error box without a window, used when startup fails.
pub fn show_fatal(msg: &str) {
    status::show_dialog(native_dialog::MessageLevel::Error, &tr::tr("Error"), msg);
}
