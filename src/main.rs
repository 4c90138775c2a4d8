//! RosterBox CLI
//!
//! Parses startup options, loads configuration, and launches the GUI.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use rosterbox::config::AppConfig;
use rosterbox::gui::alerts::AlertLevel;
use rosterbox::logging;

/// RosterBox - roster name lookup form
///
/// Autocomplete front-end for school roster search services.
#[derive(Parser)]
#[command(name = "rosterbox")]
#[command(author = "RosterBox Contributors")]
#[command(version)]
#[command(about = "Autocomplete front-end for roster search services", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the student name suggestion endpoint
    #[arg(long)]
    student_url: Option<String>,

    /// Override the teacher name suggestion endpoint
    #[arg(long)]
    teacher_url: Option<String>,

    /// Override the alert auto-dismiss delay in milliseconds
    #[arg(long)]
    alert_dismiss_ms: Option<u64>,

    /// Write a debug log of suggestion traffic to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        logging::init(path);
    }

    let mut notices: Vec<(AlertLevel, String)> = Vec::new();

    let mut config = match &cli.config {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => {
                notices.push((
                    AlertLevel::Success,
                    format!("Loaded configuration from {}", path.display()),
                ));
                config
            }
            Err(e) => {
                eprintln!("{} {}", style("error:").red().bold(), e);
                std::process::exit(1);
            }
        },
        None => {
            notices.push((
                AlertLevel::Info,
                "No configuration file given, using defaults".to_string(),
            ));
            AppConfig::default()
        }
    };

    if let Some(url) = cli.student_url {
        config.student_endpoint = url;
    }
    if let Some(url) = cli.teacher_url {
        config.teacher_endpoint = url;
    }
    if let Some(ms) = cli.alert_dismiss_ms {
        config.alert_dismiss_ms = ms;
    }

    logging::info("MAIN", &format!("student endpoint: {}", config.student_endpoint));
    logging::info("MAIN", &format!("teacher endpoint: {}", config.teacher_endpoint));

    if let Err(e) = rosterbox::gui::run(config, notices) {
        eprintln!("{} {}", style("error:").red().bold(), e);
        logging::flush();
        std::process::exit(1);
    }

    logging::flush();
}
