//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "backstrap",
    bin_name = "backstrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Node.js backend project generator",
    long_about = "Backstrap generates ready-to-run Node.js backends on \
                  Express or Hono, in JavaScript or TypeScript, with an \
                  optional database connection, ORM and MVC layout.",
    after_help = "EXAMPLES:\n\
        \x20 backstrap new my-api\n\
        \x20 backstrap new shop --lang ts --db postgres --orm typeorm\n\
        \x20 backstrap plan edge --framework hono --format json\n\
        \x20 backstrap completions bash > /usr/share/bash-completion/completions/backstrap",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 backstrap new my-api -y\n\
            \x20 backstrap new my-api --lang ts --framework hono --no-mvc\n\
            \x20 backstrap new shop --db mysql --orm sequelize -o ~/code\n\
            \x20 backstrap new shop -i"
    )]
    New(NewArgs),

    /// Show what would be generated.
    #[command(
        visible_alias = "p",
        about = "Print the file plan and dependencies without writing",
        after_help = "EXAMPLES:\n\
            \x20 backstrap plan my-api\n\
            \x20 backstrap plan my-api --db mongodb --format json"
    )]
    Plan(PlanArgs),

    /// Initialise a Backstrap configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 backstrap init\n\
            \x20 backstrap --config ./backstrap.toml init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 backstrap completions bash > ~/.local/share/bash-completion/completions/backstrap\n\
            \x20 backstrap completions zsh  > ~/.zfunc/_backstrap\n\
            \x20 backstrap completions fish > ~/.config/fish/completions/backstrap.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Backstrap configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 backstrap config get defaults.language\n\
            \x20 backstrap config list\n\
            \x20 backstrap config path"
    )]
    Config(ConfigCommands),
}

// ── project options (shared by new / plan) ───────────────────────────────────

/// Choices describing the generated project. Anything left unset falls back
/// to the `defaults` section of the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Source language.
    #[arg(short = 'l', long = "lang", value_name = "LANGUAGE", value_enum)]
    pub language: Option<Language>,

    /// HTTP framework.
    #[arg(short = 'f', long = "framework", value_name = "FRAMEWORK", value_enum)]
    pub framework: Option<FrameworkArg>,

    /// Database to connect to.
    #[arg(
        short = 'd',
        long = "db",
        visible_alias = "database",
        value_name = "DATABASE",
        value_enum
    )]
    pub database: Option<DatabaseArg>,

    /// ORM layered over a relational database.
    #[arg(long = "orm", value_name = "ORM", value_enum)]
    pub orm: Option<OrmArg>,

    /// Generate controllers, routes and models.
    #[arg(long = "mvc", overrides_with = "no_mvc")]
    pub mvc: bool,

    /// Only generate the entry point and config.
    #[arg(long = "no-mvc", overrides_with = "mvc")]
    pub no_mvc: bool,

    /// Add Express rate limiting, sessions, JWT and request validation packages.
    #[arg(long = "extras", overrides_with = "no_extras")]
    pub extras: bool,

    #[arg(long = "no-extras", overrides_with = "extras", hide = true)]
    pub no_extras: bool,
}

impl ProjectArgs {
    /// `Some(true)` for `--mvc`, `Some(false)` for `--no-mvc`, `None` if unset.
    pub fn mvc_flag(&self) -> Option<bool> {
        flag(self.mvc, self.no_mvc)
    }

    pub fn extras_flag(&self) -> Option<bool> {
        flag(self.extras, self.no_extras)
    }
}

fn flag(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `backstrap new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. Becomes the directory name and the package name.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Directory the project directory is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Write the files but do not run the package manager.
    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,

    /// Ask for every option interactively.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Choose options interactively"
    )]
    pub interactive: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `backstrap plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable listing.
    Table,
    /// JSON document.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `backstrap init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `backstrap completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `backstrap config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.language`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    #[value(alias = "js")]
    JavaScript,
    #[value(alias = "ts")]
    TypeScript,
}

/// HTTP framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FrameworkArg {
    Express,
    Hono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseArg {
    #[value(alias = "mongo")]
    MongoDb,
    MySql,
    #[value(aliases = ["postgres", "pg"])]
    PostgreSql,
    #[value(alias = "sqlite3")]
    Sqlite,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OrmArg {
    None,
    Sequelize,
    TypeOrm,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "backstrap",
            "new",
            "my-api",
            "--lang",
            "typescript",
            "--db",
            "postgresql",
            "--orm",
            "typeorm",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "my-api");
        assert_eq!(args.project.language, Some(Language::TypeScript));
        assert_eq!(args.project.database, Some(DatabaseArg::PostgreSql));
        assert_eq!(args.project.orm, Some(OrmArg::TypeOrm));
        assert_eq!(args.project.mvc_flag(), None);
    }

    #[test]
    fn short_aliases() {
        let cli = Cli::parse_from(["backstrap", "new", "x", "-l", "ts", "-d", "pg"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.project.language, Some(Language::TypeScript));
        assert_eq!(args.project.database, Some(DatabaseArg::PostgreSql));
    }

    #[test]
    fn last_mvc_flag_wins() {
        let cli = Cli::parse_from(["backstrap", "plan", "x", "--mvc", "--no-mvc"]);
        let Commands::Plan(args) = cli.command else {
            panic!("expected Plan command");
        };
        assert_eq!(args.project.mvc_flag(), Some(false));
        assert_eq!(args.project.extras_flag(), None);
        assert_eq!(args.format, PlanFormat::Table);
    }

    #[test]
    fn unknown_framework_is_rejected() {
        assert!(Cli::try_parse_from(["backstrap", "new", "x", "-f", "koa"]).is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::parse_from([
            "backstrap",
            "config",
            "path",
            "-c",
            "team.toml",
            "--output-format",
            "plain",
            "-vv",
        ]);
        assert_eq!(cli.global.config, Some(PathBuf::from("team.toml")));
        assert_eq!(cli.global.output_format, Some(OutputFormat::Plain));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["backstrap", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
