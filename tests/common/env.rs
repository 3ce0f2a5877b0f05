//! Test environment for isolated treenav runs.
//!
//! Every run gets its own working directory and config home so that user
//! configuration and `TREENAV_*` variables of the machine running the tests
//! never leak in.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a treenav CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory of every run
    pub project_root: TempDir,
    /// Stands in for `$XDG_CONFIG_HOME`
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            config_home: tempfile::tempdir().expect("create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_treenav")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Write `treenav/config.toml` under the config home
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.path().join("treenav");
        std::fs::create_dir_all(&dir).expect("create user config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("write user config");
        path
    }

    /// Run treenav in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run treenav with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("LANG", "C.UTF-8")
            .env("TERM", "xterm-256color")
            .env("NO_COLOR", "1")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("RUST_LOG")
            .env_remove("CI")
            .env_remove("TREENAV_TAB")
            .env_remove("TREENAV_BOUNDARY")
            .env_remove("TREENAV_ELEMENT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute treenav"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
