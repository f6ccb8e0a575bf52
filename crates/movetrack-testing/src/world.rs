//! Isolated environment for running the `movetrack` binary.

use anyhow::{Context, Result, bail};
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp directory holding one config file and one snapshot file.
///
/// Every command runs with `--config` and `--snapshot` pointing inside it, so movements persist
/// from one call to the next while a developer's own config and MOVETRACK_ACTOR stay out.
///
/// # Example
/// ```no_run
/// use movetrack_testing::TestWorld;
///
/// let world = TestWorld::new().with_actor("ops@example.com");
/// let json = world.run_json(&["list"]).unwrap();
/// assert_eq!(json["content"]["total"], 0);
/// ```
pub struct TestWorld {
    root: TempDir,
    actor: Option<String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            actor: None,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.toml")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.path().join("movements.json")
    }

    /// Session identity for `add`, handed over through MOVETRACK_ACTOR
    pub fn with_actor(mut self, actor: &str) -> Self {
        self.actor = Some(actor.to_string());
        self
    }

    /// Contents of the config file every command reads
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Write a file under the temp root and return its absolute path.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.path().join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Point a `movetrack` command at this world.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.root.path())
            .arg("--config")
            .arg(self.config_path())
            .arg("--snapshot")
            .arg(self.snapshot_path())
            .env_remove("RUST_LOG");

        match &self.actor {
            Some(actor) => cmd.env("MOVETRACK_ACTOR", actor),
            None => cmd.env_remove("MOVETRACK_ACTOR"),
        }
    }

    /// Run the binary and capture its output; a non-zero exit is not an error here.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("movetrack")
            .map_err(|e| anyhow::anyhow!("Failed to find movetrack binary: {}", e))?;
        let output = self.configure_command(&mut cmd).args(args).output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run with `--format json`; fails unless the command succeeds and prints valid JSON.
    pub fn run_json(&self, args: &[&str]) -> Result<Value> {
        let args: Vec<&str> = ["--format", "json"]
            .into_iter()
            .chain(args.iter().copied())
            .collect();
        self.run(&args)?.success_json()
    }
}

/// Captured exit status and output of one invocation.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn success_json(&self) -> Result<Value> {
        if !self.success() {
            bail!("movetrack exited with {}: {}", self.status, self.stderr);
        }
        serde_json::from_str(&self.stdout).context("stdout is not JSON")
    }
}
