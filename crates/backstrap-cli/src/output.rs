//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use clap::ValueEnum as _;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or_else(|| {
            OutputFormat::from_str(&config.output.format, true).unwrap_or_else(|_| {
                warn!(format = %config.output.format, "Unknown output.format, using auto");
                OutputFormat::Auto
            })
        });

        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable payload (JSON). Printed even in quiet mode.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// A `key: value` row with the key padded to `width`.
    pub fn field(&self, key: &str, value: &str, width: usize) -> io::Result<()> {
        let key = format!("{key:<width$}");
        if self.no_color {
            self.print(&format!("  {key} {value}"))
        } else {
            self.print(&format!("  {} {value}", key.dimmed()))
        }
    }

    /// Spinner for a long-running step. Hidden when quiet or not on a
    /// terminal, so piped output stays clean.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet || self.resolved_format != OutputFormat::Human {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|e| {
                warn!(error = %e, "Invalid spinner template");
                ProgressStyle::default_spinner()
            });
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, no_color: bool, format: Option<OutputFormat>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        OutputManager::new(
            &args(quiet, no_color, Some(OutputFormat::Human)),
            &AppConfig::default(),
        )
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.is_quiet());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn plain_format_disables_color() {
        let out = OutputManager::new(
            &args(false, false, Some(OutputFormat::Plain)),
            &AppConfig::default(),
        );
        assert_eq!(out.resolved_format, OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn config_format_used_when_flag_absent() {
        let mut config = AppConfig::default();
        config.output.format = "plain".into();
        let out = OutputManager::new(&args(false, false, None), &config);
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn spinner_hidden_outside_human_format() {
        let out = OutputManager::new(
            &args(false, true, Some(OutputFormat::Plain)),
            &AppConfig::default(),
        );
        assert!(out.spinner("working").is_hidden());
    }
}
