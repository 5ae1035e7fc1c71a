//! Plot windows for channel and mask results
//!
//! Each plot opens in its own window. Windows stay alive until closed;
//! closed ones are dropped the next time a plot is shown.

use super::util::gray_to_slint;
use crate::PlotWindow;
use image::GrayImage;
use slint::{ComponentHandle, PlatformError};
use std::cell::RefCell;

thread_local! {
    static PLOT_WINDOWS: RefCell<Vec<PlotWindow>> = const { RefCell::new(Vec::new()) };
}

pub fn show(title: &str, image: &GrayImage) -> Result<(), PlatformError> {
    let window = PlotWindow::new()?;
    window.set_heading(title.into());
    window.set_plot(gray_to_slint(image));
    window.show()?;

    PLOT_WINDOWS.with_borrow_mut(|windows| {
        windows.retain(|w| w.window().is_visible());
        windows.push(window);
        log::debug!("{} plot window(s) open", windows.len());
    });

    Ok(())
}
