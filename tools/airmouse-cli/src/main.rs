//! Airmouse CLI — Command-line interface for hand-tracked pointer control.
//!
//! Usage:
//!   airmouse run [OPTIONS]     Track a hand and drive the OS pointer
//!   airmouse check             Check system capabilities
//!   airmouse config            Show or write the configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "airmouse",
    about = "Drive the OS pointer with a webcam-tracked hand",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track a hand and drive the OS pointer
    Run {
        /// Webcam device path
        #[arg(long)]
        device: Option<PathBuf>,

        /// Capture width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Capture height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Target screen width in pixels
        #[arg(long)]
        screen_width: Option<u32>,

        /// Target screen height in pixels
        #[arg(long)]
        screen_height: Option<u32>,

        /// Pinch distance below which a click fires (frame pixels)
        #[arg(long)]
        click_threshold: Option<f64>,

        /// Minimum detection confidence [0.0, 1.0]
        #[arg(long)]
        detection_confidence: Option<f32>,

        /// Minimum tracking confidence [0.0, 1.0]
        #[arg(long)]
        tracking_confidence: Option<f32>,

        /// Path to the hand landmark helper script
        #[arg(long)]
        helper: Option<PathBuf>,

        /// Pointer smoothing algorithm: ema|moving-average|none
        #[arg(long)]
        smoothing: Option<String>,

        /// EMA smoothing strength [0.0, 1.0]
        #[arg(long)]
        smoothing_strength: Option<f64>,

        /// Pointer injection backend: enigo|uinput
        #[arg(long, default_value = "enigo")]
        sink: String,

        /// Append dispatched events to a JSONL log file
        #[arg(long)]
        log_events: Option<PathBuf>,
    },

    /// Check system capabilities
    Check,

    /// Show or write the configuration file
    Config {
        /// Write the effective configuration to the standard location
        #[arg(long)]
        write: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    airmouse_common::logging::init_logging(&airmouse_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Run {
            device,
            width,
            height,
            screen_width,
            screen_height,
            click_threshold,
            detection_confidence,
            tracking_confidence,
            helper,
            smoothing,
            smoothing_strength,
            sink,
            log_events,
        } => commands::run::run(commands::run::RunArgs {
            device,
            width,
            height,
            screen_width,
            screen_height,
            click_threshold,
            detection_confidence,
            tracking_confidence,
            helper,
            smoothing,
            smoothing_strength,
            sink,
            log_events,
        }),
        Commands::Check => commands::check::run(),
        Commands::Config { write } => commands::config::run(write),
    }
}
