#![windows_subsystem = "windows"]

fn main() {
    extern crate pixlab;

    if let Err(e) = pixlab::desktop_main() {
        log::error!("{e:?}");
        pixlab::report_fatal(&e);
        std::process::exit(1);
    }
}
