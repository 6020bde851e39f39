use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use unischool::config::ColorMode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "unischool", version)]
#[command(about = "Unified school management: one menu over attendance, grading and library systems", long_about = None)]
pub struct Cli {
    /// Path to a JSON config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// When to color output
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    pub save_config: bool,
}
