use crate::{errors::Error, number_system::NumberSystem};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

fn default_system() -> NumberSystem {
    NumberSystem::HEXADECIMAL
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    #[serde(
        default = "default_system",
        with = "crate::number_system::string_to_system"
    )]
    pub default_source: NumberSystem,
    #[serde(
        default = "default_system",
        with = "crate::number_system::string_to_system"
    )]
    pub default_target: NumberSystem,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            default_source: default_system(),
            default_target: default_system(),
        }
    }
}

/// Get the cross-platform configuration file path
pub fn get_config_path(app_name: &str) -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        // Linux: /etc/app-name/config.yaml
        Some(Path::new("/etc").join(app_name).join("config.yaml"))
    } else if cfg!(target_os = "windows") {
        // Windows: etc/config.yaml next to the executable
        let exe_dir = std::env::current_exe().ok()?.parent()?.to_path_buf();
        Some(exe_dir.join("etc").join("config.yaml"))
    } else {
        ProjectDirs::from("com", "", app_name).map(|dirs| dirs.config_dir().join("config.yaml"))
    }
}

pub fn parse_config(text: &str) -> crate::Result<ConverterConfig> {
    serde_yaml_bw::from_str(text).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

pub fn load_config_from(path: &Path) -> crate::Result<ConverterConfig> {
    tracing::info!("Loading config from {:?}", path);

    let normalized_path = normpath::PathExt::normalize(path)?;

    let file = File::open(normalized_path.as_path())?;
    let config: ConverterConfig = serde_yaml_bw::from_reader(file)
        .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn load_config(app_name: &str) -> crate::Result<ConverterConfig> {
    let config_path = get_config_path(app_name)
        .ok_or_else(|| Error::Config("Could not determine config path".to_string()))?;
    load_config_from(&config_path)
}

/// Like [`load_config`], but a missing or unreadable file yields the defaults.
pub fn load_config_or_default(app_name: &str) -> ConverterConfig {
    match load_config(app_name) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default config: {}", e);
            ConverterConfig::default()
        }
    }
}
