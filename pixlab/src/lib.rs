//! Pixlab
//!
//! A small desktop image editor built with the Slint framework.
//!
//! # Features
//! - Load images from disk or take a single camera snapshot
//! - Show a color channel or a red threshold mask in a plot window
//! - Sharpen the image and preview a line drawn on top of it
//!
//! # Architecture
//! - `editor`: UI independent session state and command dispatch
//! - `logic`: Slint callbacks that feed the editor and present results
//! - `config`: persisted preferences and editor defaults

slint::include_modules!();

#[macro_use]
extern crate derivative;

mod config;
mod logic;

pub mod editor;

mod version {
    include!(concat!(env!("OUT_DIR"), "/version.rs"));
}

/// Initializes the logger.
///
/// Log lines carry the local time, level, source file and line number.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Performs initialization tasks before UI creation.
///
/// # Tasks
/// - Initializes logger
/// - Loads configuration
/// - Sets XDG app ID on Linux
fn ui_before() -> anyhow::Result<()> {
    init_logger();
    config::init()?;

    #[cfg(target_os = "linux")]
    {
        _ = slint::set_xdg_app_id(config::all().app_name);
    }

    Ok(())
}

fn ui_after(ui: &AppWindow) {
    logic::init(ui);
}

/// Main entry point for the desktop application.
///
/// # Tasks
/// - Performs pre-UI initialization
/// - Creates the application window
/// - Initializes UI logic
/// - Runs the event loop
pub fn desktop_main() -> anyhow::Result<()> {
    use slint::ComponentHandle;

    ui_before()?;
    log::debug!("start...");

    let ui = AppWindow::new()?;
    ui_after(&ui);
    ui.run()?;

    log::debug!("exit...");
    Ok(())
}

/// Shows a startup failure in a native message box.
pub fn report_fatal(err: &anyhow::Error) {
    logic::show_fatal(&format!("{err:?}"));
}
