//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use sub_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_script("greet", fixtures::GREET);
///
/// let result = world.run(&["greet", "Ada"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    root: PathBuf,
    name: String,
    extra_flags: Vec<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated tool root named `tool` with an empty `libexec`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("tool");
        fs::create_dir_all(root.join("libexec")).expect("Failed to create libexec");

        Self {
            temp_dir,
            root,
            name: "tool".to_string(),
            extra_flags: Vec::new(),
            env_vars: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn libexec(&self) -> PathBuf {
        self.root.join("libexec")
    }

    /// Directory used as `XDG_CACHE_HOME` for the spawned binary.
    pub fn cache_home(&self) -> PathBuf {
        self.temp_dir.path().join("cache")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the tool. Fixtures expect `tool`.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Add a dispatcher flag (placed before `--`).
    pub fn with_flag(mut self, flag: &str) -> Self {
        self.extra_flags.push(flag.to_string());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Create an executable script under `libexec`.
    pub fn with_script(self, rel: &str, contents: &str) -> Self {
        self.write(rel, contents, 0o755);
        self
    }

    /// Create a non-executable file under `libexec`.
    pub fn with_file(self, rel: &str, contents: &str) -> Self {
        self.write(rel, contents, 0o644);
        self
    }

    pub fn with_dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.libexec().join(rel)).expect("Failed to create directory");
        self
    }

    fn write(&self, rel: &str, contents: &str, mode: u32) {
        let path = self.libexec().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(mode))
                .expect("Failed to set permissions");
        }
        #[cfg(not(unix))]
        let _ = mode;
    }

    /// Configure a CLI command with this test environment's dispatcher flags and env.
    ///
    /// User-facing arguments go after the `--` this adds.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--name")
            .arg(&self.name)
            .arg("--absolute")
            .arg(&self.root)
            .arg("--color")
            .arg("never")
            .args(&self.extra_flags)
            .arg("--");

        cmd.env("XDG_CACHE_HOME", self.cache_home());
        cmd.env_remove("SUB_LOG");
        cmd.env_remove("NO_COLOR");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Create a configured command; append user arguments with `.args(...)`.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("sub")
            .map_err(|e| anyhow::anyhow!("Failed to find sub binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Run the tool with `args` as the user-facing arguments.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);

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
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Stdout split into non-empty lines.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|line| !line.is_empty()).collect()
    }
}
