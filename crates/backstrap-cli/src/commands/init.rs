//! `backstrap init`: write the default configuration file.

use std::path::Path;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults as TOML to `--config FILE` or the platform
/// config location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let path = AppConfig::active_path(global.config.as_deref());
    write_default(&path, args.force)?;

    info!(path = %path.display(), "Configuration written");
    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

fn write_default(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let toml = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_loadable_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/backstrap.toml");

        write_default(&path, false).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("backstrap.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = write_default(&path, false).unwrap_err();
        assert!(matches!(err, CliError::ConfigExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[defaults]"));
    }
}
