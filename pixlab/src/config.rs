use anyhow::{Context, Result, bail};
use log::debug;
use once_cell::sync::Lazy;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::Mutex};

const CARGO_TOML: &str = include_str!("../Cargo.toml");
static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(skip)]
    pub app_name: String,

    #[serde(default)]
    pub preference: Preference,

    #[serde(default)]
    pub editor: Editor,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Preference {
    #[derivative(Default(value = "1000"))]
    pub win_width: u32,

    #[derivative(Default(value = "800"))]
    pub win_height: u32,

    #[derivative(Default(value = "\"en\".to_string()"))]
    pub language: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Editor {
    #[derivative(Default(value = "800"))]
    pub preview_max_width: u32,

    #[derivative(Default(value = "600"))]
    pub preview_max_height: u32,

    pub camera_index: u32,

    #[derivative(Default(value = "127"))]
    pub default_threshold: u8,

    #[derivative(Default(value = "true"))]
    pub success_dialog: bool,

    // directory of the last opened image
    pub last_dir: String,
}

impl Config {
    /// Initializes the configuration
    ///
    /// Reads the package name, creates the config directory and loads the config file.
    pub fn init(&mut self) -> Result<()> {
        let metadata =
            toml::from_str::<toml::Table>(CARGO_TOML).with_context(|| "parse Cargo.toml failed")?;

        self.app_name = metadata
            .get("package")
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("pixlab")
            .to_string();

        let app_dirs = AppDirs::new(Some(&self.app_name), true)
            .with_context(|| "can't find the config directory")?;

        self.config_path = app_dirs.config_dir.join(format!("{}.toml", self.app_name));
        fs::create_dir_all(&app_dirs.config_dir)?;

        self.load().with_context(|| "load config file failed")?;
        debug!("{:?}", self);
        Ok(())
    }

    /// Loads configuration from file, falls back to defaults when the file
    /// is missing or broken. A broken file is kept as `<name>.toml.bak`.
    fn load(&mut self) -> Result<()> {
        let text = match fs::read_to_string(&self.config_path) {
            Ok(text) => text,
            Err(_) => return self.reset(),
        };

        match toml::from_str::<Config>(&text) {
            Ok(mut c) => {
                c.config_path = self.config_path.clone();
                c.is_first_run = self.is_first_run;
                c.app_name = self.app_name.clone();
                *self = c;
                Ok(())
            }
            Err(e) => {
                log::warn!("parse `{}` failed: {e}", self.config_path.display());
                self.reset()
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.is_first_run = true;

        if self.config_path.exists() {
            let mut bak_file = self.config_path.clone().into_os_string();
            bak_file.push(".bak");
            _ = fs::copy(&self.config_path, bak_file);
        }

        self.preference = Preference::default();
        self.editor = Editor::default();
        self.save()
    }

    /// Saves the current configuration to file
    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config to toml format failed. {e:?}")),
        }
    }
}

/// Initializes the global configuration
///
/// This should be called once at application startup.
pub fn init() -> Result<()> {
    CONFIG
        .lock()
        .map_err(|e| anyhow::anyhow!("config lock poisoned: {e}"))?
        .init()
}

/// Returns a clone of the current configuration
pub fn all() -> Config {
    match CONFIG.lock() {
        Ok(config) => config.clone(),
        Err(e) => e.into_inner().clone(),
    }
}

/// Saves a new configuration and updates the global instance
pub fn save(conf: Config) -> Result<()> {
    let mut config = CONFIG
        .lock()
        .map_err(|e| anyhow::anyhow!("config lock poisoned: {e}"))?;
    *config = conf;
    config.save()
}
