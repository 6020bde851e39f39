use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unischool::api::SchoolApi;
use unischool::config::{ColorMode, SchoolConfig};
use unischool::error::{Result, SchoolError};
use unischool::session::{self, SessionOptions};

mod args;
use args::Cli;

const LOG_ENV: &str = "UNISCHOOL_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = effective_config(&cli, load_config(&cli)?);
    if cli.save_config {
        return handle_save_config(&cli, &config);
    }

    let options = SessionOptions {
        show_banner: config.show_banner,
        styled: apply_color_mode(config.color),
    };
    debug!(?options, "starting session");

    let api = SchoolApi::standard();
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&api, stdin.lock(), stdout.lock(), options)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "unischool=debug" } else { "error" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "unischool", "unischool").map(|d| d.config_dir().to_path_buf())
}

fn load_config(cli: &Cli) -> Result<SchoolConfig> {
    if let Some(path) = &cli.config {
        // Saving may create the file
        if cli.save_config && !path.exists() {
            return Ok(SchoolConfig::default());
        }
        return SchoolConfig::load_file(path);
    }
    match config_dir() {
        Some(dir) => SchoolConfig::load(dir),
        None => Ok(SchoolConfig::default()),
    }
}

/// Loaded config with command-line flags applied on top.
fn effective_config(cli: &Cli, mut config: SchoolConfig) -> SchoolConfig {
    if cli.no_banner {
        config.show_banner = false;
    }
    if let Some(color) = cli.color {
        config.color = ColorMode::from(color);
    }
    config
}

fn handle_save_config(cli: &Cli, config: &SchoolConfig) -> Result<()> {
    let path = match &cli.config {
        Some(path) => {
            config.save_file(path)?;
            path.clone()
        }
        None => {
            let dir = config_dir().ok_or_else(|| {
                SchoolError::Config("could not determine a config directory".to_string())
            })?;
            config.save(dir)?
        }
    };
    println!("Saved config to {}", path.display());
    Ok(())
}

/// Returns whether the session should style its output.
fn apply_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => {
            colored::control::set_override(true);
            true
        }
        ColorMode::Never => {
            colored::control::set_override(false);
            false
        }
        // colored checks the terminal itself
        ColorMode::Auto => true,
    }
}
