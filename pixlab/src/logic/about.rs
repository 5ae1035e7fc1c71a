//! Window title with application name and version.

use super::tr::tr;
use crate::{AppWindow, config, global_store, version::VERSION};
use slint::ComponentHandle;

pub fn init(ui: &AppWindow) {
    let version = if VERSION.is_empty() { "v0.0.1" } else { VERSION };

    global_store!(ui).set_app_title(
        format!(
            "{} - {} {}",
            tr("Image Processor"),
            config::all().app_name,
            version
        )
        .into(),
    );
}
