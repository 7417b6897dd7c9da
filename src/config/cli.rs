use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gamepad-mouse")]
#[command(about = "Drive the mouse pointer and arrow keys with a gamepad")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Gamepad evdev node (skips auto-detection)
    #[arg(long, env = "GAMEPAD_MOUSE_DEVICE")]
    pub device: Option<PathBuf>,

    /// Directory scanned for gamepads
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Name of the virtual pointer device
    #[arg(long)]
    pub name: Option<String>,

    /// Left stick dead zone in raw axis units
    #[arg(long)]
    pub stick_dead_zone: Option<u32>,

    /// Right stick dead zone in raw axis units
    #[arg(long)]
    pub scroll_dead_zone: Option<u32>,

    /// Pointer movement per tick at full stick deflection
    #[arg(long)]
    pub pointer_speed: Option<u32>,

    /// Hi-res wheel units per tick at full stick deflection
    #[arg(long)]
    pub scroll_speed: Option<u32>,

    /// Raw value reported at full stick deflection
    #[arg(long)]
    pub axis_max: Option<i32>,

    /// Polling interval in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Delay after creating the virtual device, in milliseconds
    #[arg(long)]
    pub startup_delay_ms: Option<u64>,

    /// Path to config file
    #[arg(long, env = "GAMEPAD_MOUSE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List evdev nodes and whether each one is a gamepad
    List,
    /// Dump raw gamepad events for debugging
    Dump,
}
