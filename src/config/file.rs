use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::discovery::DEFAULT_INPUT_DIR;

pub const DEFAULT_NAME: &str = "Gamepad Mouse";
pub const DEFAULT_DEAD_ZONE: u32 = 1600;
pub const DEFAULT_SPEED: u32 = 15;
pub const DEFAULT_AXIS_MAX: i32 = 32767;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;
pub const DEFAULT_STARTUP_DELAY_MS: u64 = 1000;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub device: Option<PathBuf>,
    pub input_dir: PathBuf,
    pub name: String,
    pub stick_dead_zone: u32,
    pub scroll_dead_zone: u32,
    pub pointer_speed: u32,
    pub scroll_speed: u32,
    pub axis_max: i32,
    pub poll_interval_ms: u64,
    pub startup_delay_ms: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            device: None,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            name: DEFAULT_NAME.into(),
            stick_dead_zone: DEFAULT_DEAD_ZONE,
            scroll_dead_zone: DEFAULT_DEAD_ZONE,
            pointer_speed: DEFAULT_SPEED,
            scroll_speed: DEFAULT_SPEED,
            axis_max: DEFAULT_AXIS_MAX,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
        }
    }
}

pub fn parse(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

pub fn load_from_path(path: &Path) -> Option<FileConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match parse(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_from_default_paths() -> Option<FileConfig> {
    for path in default_config_paths() {
        if path.exists() {
            if let Some(config) = load_from_path(&path) {
                return Some(config);
            }
        }
    }
    None
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("gamepad-mouse.toml"));

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config").join("gamepad-mouse.toml"));
    }

    paths
}
