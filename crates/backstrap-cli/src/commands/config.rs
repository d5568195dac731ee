//! `backstrap config`: inspect the merged configuration.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_deref());
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `install.timeout_secs`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::UnknownConfigKey { key: key.into() };

    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let mut node = &tree;
    for part in key.split('.') {
        node = node.get(part).ok_or_else(unknown)?;
    }

    match node {
        Value::String(s) => Ok(s.clone()),
        Value::Object(_) => Err(unknown()),
        other => Ok(other.to_string()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
