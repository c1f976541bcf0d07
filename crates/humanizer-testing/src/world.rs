//! TestWorld pattern for isolated CLI runs.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory per test
//! - Writing input files and config
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment builder.
///
/// # Example
/// ```no_run
/// use humanizer_testing::TestWorld;
///
/// let world = TestWorld::new().with_input("draft.txt", "The quick brown fox jumps");
///
/// let result = world
///     .run(&["humanize", "--input", "draft.txt", "--level", "0"])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".humanizer");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.humanizer).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root, used as the working directory.
    pub fn cwd(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a file relative to the working directory.
    pub fn with_input(self, name: &str, contents: &str) -> Self {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write input file");
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, contents: &str) -> Self {
        let path = self.data_dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, None)
    }

    /// Execute a command, feeding `stdin` to the process when given.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("humanizer")
            .map_err(|e| anyhow::anyhow!("Failed to find humanizer binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        if let Some(input) = stdin {
            cmd.write_stdin(input.to_string());
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
