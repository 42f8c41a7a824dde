//! Test environment builder for isolated localetypes testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a localetypes CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse each non-empty stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json {l:?}: {e}")))
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_localetypes")),
        }
    }

    /// Project with `localetypes.toml` and English/French locales
    pub fn with_locales() -> Self {
        let env = Self::new();
        env.write("localetypes.toml", super::fixtures::CONFIG);
        env.write("locales/en.yaml", super::fixtures::EN_YAML);
        env.write("locales/fr.yaml", super::fixtures::FR_YAML);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn read(&self, relative: &str) -> Option<String> {
        fs::read_to_string(self.project_path(relative)).ok()
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run the CLI from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute localetypes");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
