use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary store file
pub struct CliTestHarness {
    _temp_dir: TempDir,
    store_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary store
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("reminders.json");

        Self {
            _temp_dir: temp_dir,
            store_path,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("remind").expect("Failed to find remind binary");
        cmd.env("REMIND_STORE_PATH", &self.store_path);
        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Helper to run a command and capture its parsed JSON stdout
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");
        assert!(output.status.success(), "command failed: {:?}", args);
        serde_json::from_slice(&output.stdout).expect("stdout was not valid JSON")
    }
}
