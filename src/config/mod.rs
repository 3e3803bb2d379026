use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Fixed chart width in pixels; absent means "fill the container".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_width: Option<u32>,
    #[serde(default = "default_axis_label_font_size")]
    pub axis_label_font_size: u32,
    #[serde(default = "default_milestone_size")]
    pub milestone_size: u32,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_page_title() -> String {
    "Modern History Timeline".to_string()
}
fn default_date_format() -> String {
    "%d-%B-%Y".to_string()
}
fn default_axis_label_font_size() -> u32 {
    12
}
fn default_milestone_size() -> u32 {
    300
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            page_title: default_page_title(),
            date_format: default_date_format(),
            chart_width: None,
            axis_label_font_size: default_axis_label_font_size(),
            milestone_size: default_milestone_size(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeline")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimeline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeline.conf")
    }

    /// Return the default path of the backing store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("store.xlsx")
    }

    /// Backing store path with `~/` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Write the configuration file (creating the directory if needed).
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self)?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Build the configuration written by `init`.
    ///
    /// A relative custom store name is placed inside the config directory,
    /// an absolute one is kept as-is.
    pub fn for_init(custom_store: Option<&str>) -> Self {
        let store = match custom_store {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::store_file(),
        };

        Config {
            store: store.to_string_lossy().to_string(),
            ..Config::default()
        }
    }
}
