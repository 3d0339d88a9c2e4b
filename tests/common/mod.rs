//! Integration test common infrastructure.
//!
//! Writes list and config files into a temporary directory and runs the
//! built `ipagg` binary against them.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory holding the files for one run.
pub struct TestRun {
    dir: TempDir,
    list: PathBuf,
    config: Option<PathBuf>,
}

impl TestRun {
    /// Create a run over the given list-file contents.
    pub fn with_list(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let list = dir.path().join("list.txt");
        std::fs::write(&list, contents).expect("Failed to write list file");
        Self {
            dir,
            list,
            config: None,
        }
    }

    /// Add a config file with the given TOML contents.
    pub fn config(mut self, toml: &str) -> Self {
        let path = self.dir.path().join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config file");
        self.config = Some(path);
        self
    }

    /// Run the binary and wait for it to exit.
    pub fn run(&self) -> RunOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_ipagg"));
        command.arg(&self.list).env_remove("RUST_LOG");
        if let Some(config) = &self.config {
            command.arg(config);
        }
        RunOutput(command.output().expect("Failed to run ipagg"))
    }
}

/// Captured process output.
pub struct RunOutput(pub Output);

#[allow(dead_code)]
impl RunOutput {
    pub fn success(&self) -> bool {
        self.0.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.0.status.code()
    }

    /// Non-empty stdout lines.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.stderr).into_owned()
    }
}
