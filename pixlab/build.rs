use std::{env, fs, path::Path};

fn main() {
    write_app_version();

    let config = slint_build::CompilerConfiguration::new().with_style("fluent".into());
    slint_build::compile_with_config("ui/appwindow.slint", config).unwrap();
}

fn write_app_version() {
    let version = duct::cmd!("git", "describe", "--tags", "--always")
        .stderr_null()
        .read()
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| format!("v{}", env!("CARGO_PKG_VERSION")));

    let out_dir = env::var("OUT_DIR").unwrap();
    let output = format!(r#"pub static VERSION: &str = "{version}";"#);
    fs::write(Path::new(&out_dir).join("version.rs"), output).unwrap();

    println!("cargo:rerun-if-changed=ui");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
