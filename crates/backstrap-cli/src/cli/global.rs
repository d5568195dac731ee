//! Flags accepted before or after any subcommand.

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace. `RUST_LOG` wins.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and machine-readable data.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output. Any non-empty, non-falsey `NO_COLOR` also sets it.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Backstrap config file; need not exist yet.
    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "FILE",
        env = "BACKSTRAP_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output style; defaults to `output.format` from the config file.
    #[arg(long = "output-format", global = true, value_enum, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colors and spinners.
    Human,
    /// No colors, no spinners.
    Plain,
}
