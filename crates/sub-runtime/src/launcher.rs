use crate::env::Environment;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Everything needed to start one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Environment,
}

impl LaunchRequest {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Environment::new(),
        }
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command.envs(self.env.iter());
        command
    }
}

/// Output of a script run with captured stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub code: i32,
    pub stdout: Vec<u8>,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Process-launching collaborator.
///
/// The dispatcher never spawns processes directly; it builds a [`LaunchRequest`] and
/// hands it to a launcher, which keeps resolution and binding testable without a shell.
pub trait ProcessLauncher {
    /// Run with inherited stdio and wait; returns the exit code to relay.
    fn run(&self, request: &LaunchRequest) -> io::Result<i32>;

    /// Run with stdout captured, stdin and stderr detached.
    fn capture(&self, request: &LaunchRequest) -> io::Result<Captured>;
}

/// Launcher backed by `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn run(&self, request: &LaunchRequest) -> io::Result<i32> {
        tracing::debug!(program = %request.program.display(), args = ?request.args, "launching");
        let status = request
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(exit_code(status))
    }

    fn capture(&self, request: &LaunchRequest) -> io::Result<Captured> {
        tracing::debug!(program = %request.program.display(), "capturing");
        let output = request
            .command()
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        Ok(Captured {
            code: exit_code(output.status),
            stdout: output.stdout,
        })
    }
}

/// Map an exit status to a shell-style code; signal deaths become `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> LaunchRequest {
        LaunchRequest::new("/bin/sh").args(["-c", script])
    }

    #[test]
    fn test_run_relays_exit_code() {
        assert_eq!(SystemLauncher.run(&sh("exit 7")).unwrap(), 7);
        assert_eq!(SystemLauncher.run(&sh("true")).unwrap(), 0);
    }

    #[test]
    fn test_signal_maps_to_128_plus_signal() {
        assert_eq!(SystemLauncher.run(&sh("kill -TERM $$")).unwrap(), 128 + 15);
    }

    #[test]
    fn test_capture_passes_environment() {
        let mut env = Environment::new();
        env.set("_T_COMPLETE", "true");

        let captured = SystemLauncher
            .capture(&sh("echo \"$_T_COMPLETE\"").env(env))
            .unwrap();

        assert!(captured.success());
        assert_eq!(captured.stdout, b"true\n");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let err = SystemLauncher
            .run(&LaunchRequest::new("/nonexistent/sub-test-program"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
