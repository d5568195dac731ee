//! npm-backed dependency installer.
//!
//! Runs `npm install <runtime...>` then `npm install --save-dev <dev...>`
//! inside the project root. Output is captured and logged at DEBUG; on
//! failure the tail of stderr is carried in the error.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use backstrap_core::{
    application::{ApplicationError, ports::DependencyInstaller},
    domain::DependencyManifest,
    error::BackstrapResult,
};
use tracing::{debug, info, instrument, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const STDERR_TAIL_LINES: usize = 10;

#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "npm";

/// One package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
    timeout: Option<Duration>,
}

impl NpmInstaller {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: None,
        }
    }

    /// Use another executable in place of `npm` (a wrapper, or `pnpm`).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Kill each command that runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The commands `install` would run, in order. Empty groups are skipped.
    pub fn command_lines(&self, manifest: &DependencyManifest) -> Vec<InstallCommand> {
        let mut commands = Vec::new();

        let runtime = manifest.dependencies();
        if !runtime.is_empty() {
            commands.push(self.command(&["install"], &runtime));
        }
        let dev = manifest.dev_dependencies();
        if !dev.is_empty() {
            commands.push(self.command(&["install", "--save-dev"], &dev));
        }
        commands
    }

    fn command(&self, head: &[&str], packages: &[&str]) -> InstallCommand {
        InstallCommand {
            program: self.program.clone(),
            args: head
                .iter()
                .chain(packages)
                .map(|s| s.to_string())
                .collect(),
        }
    }

    fn run(&self, command: &InstallCommand, root: &Path) -> BackstrapResult<()> {
        let line = command.to_string();
        info!(command = %line, "Running");

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ApplicationError::InstallFailed {
                command: line.clone(),
                reason: format!("failed to start: {e}"),
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let out_reader = thread::spawn(move || drain(stdout));
        let err_reader = thread::spawn(move || drain(stderr));

        let status = self.wait(&mut child, &line)?;

        let out = out_reader.join().unwrap_or_default();
        let err = err_reader.join().unwrap_or_default();
        if !out.trim().is_empty() {
            debug!(command = %line, stdout = %out.trim_end(), "Command output");
        }

        if status.success() {
            return Ok(());
        }

        warn!(command = %line, %status, "Command failed");
        let tail = tail(&err, STDERR_TAIL_LINES);
        let reason = if tail.is_empty() {
            status.to_string()
        } else {
            format!("{status}\n{tail}")
        };
        Err(ApplicationError::InstallFailed {
            command: line,
            reason,
        }
        .into())
    }

    fn wait(&self, child: &mut Child, line: &str) -> BackstrapResult<ExitStatus> {
        let wait_error = |e: std::io::Error| ApplicationError::InstallFailed {
            command: line.to_string(),
            reason: format!("failed to wait: {e}"),
        };

        let Some(limit) = self.timeout else {
            return Ok(child.wait().map_err(wait_error)?);
        };

        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait().map_err(wait_error)? {
                return Ok(status);
            }
            if started.elapsed() >= limit {
                warn!(command = %line, ?limit, "Timed out, killing");
                let _ = child.kill();
                let _ = child.wait();
                return Err(ApplicationError::InstallTimedOut {
                    command: line.to_string(),
                    after_secs: limit.as_secs(),
                }
                .into());
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyInstaller for NpmInstaller {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn install(&self, root: &Path, manifest: &DependencyManifest) -> BackstrapResult<()> {
        for command in self.command_lines(manifest) {
            self.run(&command, root)?;
        }
        Ok(())
    }
}

fn drain(pipe: Option<impl Read>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use backstrap_core::domain::DependencyKind;

    fn manifest() -> DependencyManifest {
        let mut m = DependencyManifest::new();
        m.runtime(&["dotenv", "express"]).dev(&["nodemon"]);
        m
    }

    #[test]
    fn command_lines_split_runtime_and_dev() {
        let lines: Vec<String> = NpmInstaller::new()
            .with_program("npm")
            .command_lines(&manifest())
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            vec![
                "npm install dotenv express",
                "npm install --save-dev nodemon"
            ]
        );
    }

    #[test]
    fn empty_groups_are_skipped() {
        let mut m = DependencyManifest::new();
        m.add("hono", DependencyKind::Runtime);
        let commands = NpmInstaller::new().command_lines(&m);
        assert_eq!(commands.len(), 1);
        assert!(NpmInstaller::new()
            .command_lines(&DependencyManifest::new())
            .is_empty());
    }

    #[test]
    fn tail_keeps_last_non_empty_lines() {
        assert_eq!(tail("a\n\nb\nc\n", 2), "b\nc");
        assert_eq!(tail("", 3), "");
    }

    #[test]
    fn missing_program_is_install_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let installer = NpmInstaller::new().with_program("backstrap-no-such-package-manager");
        let err = installer.install(tmp.path(), &manifest()).unwrap_err();
        match err {
            backstrap_core::error::BackstrapError::Application(
                ApplicationError::InstallFailed { command, reason },
            ) => {
                assert!(command.starts_with("backstrap-no-such-package-manager install"));
                assert!(reason.starts_with("failed to start"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // `sh install <args>` runs a script named `install` in the project root,
    // which stands in for the package manager.
    #[cfg(unix)]
    mod with_shell {
        use super::*;
        use std::fs;

        fn project_with_script(body: &str) -> tempfile::TempDir {
            let tmp = tempfile::tempdir().unwrap();
            fs::write(tmp.path().join("install"), body).unwrap();
            tmp
        }

        #[test]
        fn runs_in_project_root_in_order() {
            let tmp = project_with_script("echo \"$@\" >> calls.txt\n");
            NpmInstaller::new()
                .with_program("sh")
                .install(tmp.path(), &manifest())
                .unwrap();

            let calls = fs::read_to_string(tmp.path().join("calls.txt")).unwrap();
            assert_eq!(calls, "dotenv express\n--save-dev nodemon\n");
        }

        #[test]
        fn non_zero_exit_carries_stderr_tail() {
            let tmp = project_with_script("echo 'ERR! 404 not found' >&2\nexit 1\n");
            let err = NpmInstaller::new()
                .with_program("sh")
                .install(tmp.path(), &manifest())
                .unwrap_err();
            assert!(err.to_string().contains("ERR! 404 not found"));
        }

        #[test]
        fn slow_command_times_out() {
            let tmp = project_with_script("sleep 5\n");
            let err = NpmInstaller::new()
                .with_program("sh")
                .with_timeout(Duration::from_millis(200))
                .install(tmp.path(), &manifest())
                .unwrap_err();
            assert!(matches!(
                err,
                backstrap_core::error::BackstrapError::Application(
                    ApplicationError::InstallTimedOut { .. }
                )
            ));
        }
    }
}
