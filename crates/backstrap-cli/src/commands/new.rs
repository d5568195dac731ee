//! Implementation of the `backstrap new` command.
//!
//! Responsibility: resolve options from flags, configuration and (optionally)
//! prompts, call the scaffold service, and display results. No business
//! logic lives here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, instrument};

use backstrap_adapters::{LocalFilesystem, NpmInstaller};
use backstrap_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{ProjectOptions, compose},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    commands::{Selection, show_options},
    config::{AppConfig, InstallConfig},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `backstrap new` command.
///
/// 1. Resolve options (config defaults, flags, prompts)
/// 2. Confirm with user unless `--yes` or `--quiet`
/// 3. Early-exit if `--dry-run`
/// 4. Write the project via `ScaffoldService`
/// 5. Install dependencies unless skipped
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut selection = Selection::resolve(&config.defaults, &args.project)?;
    if args.interactive {
        selection = ask(selection)?;
    }
    let options = selection.into_options(&args.name)?;

    let parent = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let root = ScaffoldService::project_root(&options, &parent);
    let install = should_install(&args, &config.install);

    if !global.quiet && !args.yes && !args.dry_run {
        show_options(&options, Some(&root), &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let mut installer = NpmInstaller::new();
    if let Some(limit) = install_timeout(&config.install) {
        installer = installer.with_timeout(limit);
    }

    if args.dry_run {
        return dry_run(&options, &root, install.then_some(&installer), &output);
    }

    let mut service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    if install {
        service = service.with_installer(Box::new(installer.clone()));
    }

    output.header(&format!("Creating '{}'...", options.name()))?;
    let report = service.write(&options, &parent)?;
    output.success(&format!(
        "Wrote {} files to {}",
        report.files.len(),
        report.root.display()
    ))?;

    let installed = run_install(&service, &installer, &report, &output)?;

    info!(project = %options.name(), installed, "Project created");
    next_steps(&options, &report, installed, &installer, &output)?;
    Ok(())
}

fn should_install(args: &NewArgs, config: &InstallConfig) -> bool {
    config.enabled && !args.skip_install
}

fn install_timeout(config: &InstallConfig) -> Option<Duration> {
    (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs))
}

#[cfg(feature = "interactive")]
fn ask(selection: Selection) -> CliResult<Selection> {
    crate::prompt::ask(selection)
}

#[cfg(not(feature = "interactive"))]
fn ask(_selection: Selection) -> CliResult<Selection> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

fn run_install(
    service: &ScaffoldService,
    installer: &NpmInstaller,
    report: &ScaffoldReport,
    output: &OutputManager,
) -> CliResult<bool> {
    if !service.has_installer() {
        return Ok(false);
    }

    let spinner = output.spinner("Installing dependencies...");
    match service.install(report) {
        Ok(installed) => {
            spinner.finish_and_clear();
            output.success("Dependencies installed")?;
            Ok(installed)
        }
        Err(e) => {
            spinner.finish_and_clear();
            output.warning(&format!(
                "Project files were kept in {}; once the problem is fixed, run there:",
                report.root.display()
            ))?;
            for line in install_lines(installer, report) {
                output.print(&format!("  {line}"))?;
            }
            Err(e.into())
        }
    }
}

fn dry_run(
    options: &ProjectOptions,
    root: &Path,
    installer: Option<&NpmInstaller>,
    output: &OutputManager,
) -> CliResult<()> {
    let composition = compose(options);

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        options.name(),
        root.display()
    ))?;
    for file in &composition.files {
        output.print(&format!("  {}", file.path))?;
    }

    match installer {
        Some(installer) => {
            output.print("")?;
            output.print("Would run:")?;
            for command in installer.command_lines(&composition.manifest) {
                output.print(&format!("  {command}"))?;
            }
        }
        None => output.print("Dependencies would not be installed")?,
    }
    Ok(())
}

/// The npm commands that install the manifest of a written project.
fn install_lines(installer: &NpmInstaller, report: &ScaffoldReport) -> Vec<String> {
    installer
        .command_lines(&report.manifest)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn next_steps(
    options: &ProjectOptions,
    report: &ScaffoldReport,
    installed: bool,
    installer: &NpmInstaller,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!("Project '{}' created!", options.name()))?;
    if output.is_quiet() {
        return Ok(());
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", shell_quote(&report.root)))?;
    if !installed {
        for line in install_lines(installer, report) {
            output.print(&format!("  {line}"))?;
        }
    }
    if options.store().is_some() {
        output.print("  # review the connection settings in .env")?;
    }
    output.print("  npm run dev")?;
    Ok(())
}

fn shell_quote(path: &Path) -> String {
    let text = path.display().to_string();
    if text.chars().any(char::is_whitespace) {
        format!("\"{text}\"")
    } else {
        text
    }
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProjectArgs;

    fn args(skip_install: bool) -> NewArgs {
        NewArgs {
            name: "demo".into(),
            project: ProjectArgs::default(),
            output: None,
            yes: true,
            dry_run: false,
            skip_install,
            interactive: false,
        }
    }

    #[test]
    fn install_needs_config_and_no_skip_flag() {
        let enabled = InstallConfig::default();
        let disabled = InstallConfig {
            enabled: false,
            ..InstallConfig::default()
        };
        assert!(should_install(&args(false), &enabled));
        assert!(!should_install(&args(true), &enabled));
        assert!(!should_install(&args(false), &disabled));
    }

    #[test]
    fn zero_timeout_means_unbounded() {
        let unbounded = InstallConfig {
            timeout_secs: 0,
            ..InstallConfig::default()
        };
        assert_eq!(install_timeout(&unbounded), None);
        assert_eq!(
            install_timeout(&InstallConfig::default()),
            Some(Duration::from_secs(600))
        );
    }

    #[test]
    fn install_lines_name_every_package() {
        let options = ProjectOptions::builder().name("demo").unwrap().build().unwrap();
        let report = ScaffoldReport {
            root: PathBuf::from("./demo"),
            files: Vec::new(),
            directories: 0,
            manifest: compose(&options).manifest,
            installed: false,
        };
        let lines = install_lines(&NpmInstaller::new().with_program("npm"), &report);
        assert_eq!(
            lines,
            vec![
                "npm install dotenv express".to_string(),
                "npm install --save-dev nodemon".to_string(),
            ]
        );
    }

    #[test]
    fn paths_with_spaces_are_quoted() {
        assert_eq!(shell_quote(Path::new("./my api")), "\"./my api\"");
        assert_eq!(shell_quote(Path::new("./api")), "./api");
    }
}
