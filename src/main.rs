mod config;
mod device;
mod discovery;
mod dump;
mod error;
mod input;
mod signal;
mod translator;

use std::path::PathBuf;
use std::thread;

use clap::Parser;

use config::{Cli, Command, Config};
use device::{Gamepad, VirtualPointer};
use translator::Translator;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load(&cli);
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    signal::install()?;

    match cli.command {
        Some(Command::List) => return list(&config),
        Some(Command::Dump) => {
            let path = resolve_device(&config);
            return dump::run_dump(&path, config.poll_interval(), signal::requested);
        }
        None => {}
    }

    let path = resolve_device(&config);

    log::info!("Initializing gamepad mouse driver");
    let gamepad = Gamepad::open(&path)?;
    log::info!(
        "Using {} ({})",
        gamepad.path().display(),
        gamepad.name().unwrap_or_else(|_| "unknown".into())
    );
    let pointer = VirtualPointer::create(&config.name)?;

    // Give udev and the display server time to pick up the new device.
    thread::sleep(config.startup_delay());

    log::info!("Starting driver");
    let mut translator = Translator::new(gamepad, pointer, config.analog());
    translator.run(config.poll_interval(), signal::requested)?;

    log::info!("Stopping driver");
    Ok(())
}

fn resolve_device(config: &Config) -> PathBuf {
    if let Some(ref device) = config.device {
        return device.clone();
    }
    match discovery::find_gamepad(&config.input_dir) {
        Ok(path) => path,
        Err(e) => {
            log::error!("Unable to detect gamepad: {}", e);
            std::process::exit(1);
        }
    }
}

fn list(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    for candidate in discovery::list(&config.input_dir)? {
        println!(
            "{}  {}  {}",
            candidate.path.display(),
            if candidate.gamepad { "gamepad" } else { "-" },
            candidate.name.as_deref().unwrap_or("?")
        );
    }
    Ok(())
}
