use crate::error::{AppError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 65_536;

/// User settings read from `config.toml`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Printed before every line read in interactive mode.
    pub prompt: String,
    /// Ask before `saveas` replaces an existing file.
    pub confirm_overwrite: bool,
    /// Ask whether to save before a modified document is closed.
    pub confirm_unsaved: bool,
    /// Answer given to every question in command mode.
    pub assume_yes: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: ">".to_string(),
            confirm_overwrite: true,
            confirm_unsaved: true,
            assume_yes: false,
            log_level: None,
        }
    }
}

/// Load the configuration.
///
/// `config_file` is used instead of the user config when given; it is an
/// error for it not to exist. Problems reading or parsing either file are
/// returned as warnings and the defaults are used.
pub fn load_config(config_file: Option<&PathBuf>) -> Result<(Config, Vec<String>)> {
    let mut warnings = Vec::new();

    let path = match config_file {
        Some(path) if !path.exists() => {
            return Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => path.clone(),
        None => match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok((Config::default(), warnings)),
        },
    };

    let config = match read_config(&path) {
        Ok(config) => config,
        Err(warning) => {
            warnings.push(warning);
            Config::default()
        }
    };
    Ok((config, warnings))
}

fn read_config(path: &Path) -> std::result::Result<Config, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    toml::from_str::<Config>(&content)
        .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridcalc")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
