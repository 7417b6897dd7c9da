mod cli;
mod file;

pub use cli::{Cli, Command};

use std::path::PathBuf;
use std::time::Duration;

use crate::input::{AnalogMapping, AxisTransform};

use file::FileConfig;

/// Merged configuration from CLI args and TOML file.
#[derive(Debug, Clone)]
pub struct Config {
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

impl Config {
    /// Load configuration by merging TOML file with CLI overrides.
    pub fn load(cli: &Cli) -> Self {
        let file_config = cli
            .config
            .as_ref()
            .and_then(|p| file::load_from_path(p))
            .or_else(file::load_from_default_paths)
            .unwrap_or_default();

        Self::merge(cli, file_config)
    }

    fn merge(cli: &Cli, file_config: FileConfig) -> Self {
        Self {
            device: cli.device.clone().or(file_config.device),
            input_dir: cli.input_dir.clone().unwrap_or(file_config.input_dir),
            name: cli.name.clone().unwrap_or(file_config.name),
            stick_dead_zone: cli.stick_dead_zone.unwrap_or(file_config.stick_dead_zone),
            scroll_dead_zone: cli.scroll_dead_zone.unwrap_or(file_config.scroll_dead_zone),
            pointer_speed: cli.pointer_speed.unwrap_or(file_config.pointer_speed),
            scroll_speed: cli.scroll_speed.unwrap_or(file_config.scroll_speed),
            axis_max: cli.axis_max.unwrap_or(file_config.axis_max),
            poll_interval_ms: cli.poll_interval_ms.unwrap_or(file_config.poll_interval_ms),
            startup_delay_ms: cli.startup_delay_ms.unwrap_or(file_config.startup_delay_ms),
        }
    }

    pub fn analog(&self) -> AnalogMapping {
        AnalogMapping {
            pointer: AxisTransform::new(self.stick_dead_zone, self.pointer_speed, self.axis_max),
            scroll: AxisTransform::new(self.scroll_dead_zone, self.scroll_speed, self.axis_max),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.axis_max <= 0 {
            return Err("axis_max must be positive");
        }
        if self.pointer_speed == 0 || self.scroll_speed == 0 {
            return Err("pointer_speed and scroll_speed must be positive");
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be positive");
        }
        if self.name.is_empty() {
            return Err("Virtual device name must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("gamepad-mouse").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_reproduce_fixed_behavior() {
        let config = Config::merge(&cli(&[]), FileConfig::default());
        assert_eq!(config.device, None);
        assert_eq!(config.input_dir, PathBuf::from("/dev/input"));
        assert_eq!(config.name, "Gamepad Mouse");
        assert_eq!(config.analog(), AnalogMapping::default());
        assert_eq!(config.poll_interval(), Duration::from_millis(10));
        assert_eq!(config.startup_delay(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cli_overrides_file() {
        let file_config = FileConfig {
            pointer_speed: 20,
            scroll_speed: 5,
            device: Some(PathBuf::from("/dev/input/event4")),
            ..FileConfig::default()
        };
        let config = Config::merge(
            &cli(&["--pointer-speed", "30", "--device", "/dev/input/event9"]),
            file_config,
        );
        assert_eq!(config.pointer_speed, 30);
        assert_eq!(config.scroll_speed, 5);
        assert_eq!(config.device, Some(PathBuf::from("/dev/input/event9")));
    }

    #[test]
    fn subcommands_parse() {
        assert!(matches!(cli(&["list"]).command, Some(Command::List)));
        assert!(matches!(
            cli(&["--device", "/dev/input/event2", "dump"]).command,
            Some(Command::Dump)
        ));
        assert!(cli(&[]).command.is_none());
    }

    #[test]
    fn validation_rejects_nonsense() {
        let base = Config::merge(&cli(&[]), FileConfig::default());

        let bad = Config { axis_max: 0, ..base.clone() };
        assert!(bad.validate().is_err());

        let bad = Config { poll_interval_ms: 0, ..base.clone() };
        assert!(bad.validate().is_err());

        let bad = Config { scroll_speed: 0, ..base.clone() };
        assert!(bad.validate().is_err());

        let bad = Config { name: String::new(), ..base };
        assert!(bad.validate().is_err());
    }
}
