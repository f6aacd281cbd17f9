#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use sub_runtime::{Captured, Config, LaunchRequest, ProcessLauncher};
use tempfile::TempDir;

pub const GREET: &str = "#!/bin/sh\n# Summary: Greets someone\n# Usage: {cmd} <name> [--loud]\n";

/// A temporary root with a `libexec` tree.
pub struct Tree {
    dir: TempDir,
}

impl Tree {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("libexec")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn libexec(&self) -> PathBuf {
        self.root().join("libexec")
    }

    pub fn config(&self) -> Config {
        Config::new("tool", self.root()).with_cache_dir(self.root().join("cache"))
    }

    pub fn script(self, rel: &str, contents: &str) -> Self {
        self.file(rel, contents, 0o755)
    }

    pub fn file(self, rel: &str, contents: &str, mode: u32) -> Self {
        let path = self.libexec().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        self
    }

    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.libexec().join(rel)).unwrap();
        self
    }
}

/// Launcher that records requests instead of spawning processes.
#[derive(Default)]
pub struct RecordingLauncher {
    pub requests: RefCell<Vec<LaunchRequest>>,
    pub code: i32,
    pub stdout: String,
}

impl RecordingLauncher {
    pub fn exiting(code: i32) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    pub fn printing(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            ..Self::default()
        }
    }

    pub fn last(&self) -> LaunchRequest {
        self.requests.borrow().last().cloned().unwrap()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn run(&self, request: &LaunchRequest) -> io::Result<i32> {
        self.requests.borrow_mut().push(request.clone());
        Ok(self.code)
    }

    fn capture(&self, request: &LaunchRequest) -> io::Result<Captured> {
        self.requests.borrow_mut().push(request.clone());
        Ok(Captured {
            code: self.code,
            stdout: self.stdout.clone().into_bytes(),
        })
    }
}

/// Launcher whose every launch fails like a missing executable.
pub struct FailingLauncher;

impl ProcessLauncher for FailingLauncher {
    fn run(&self, _request: &LaunchRequest) -> io::Result<i32> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }

    fn capture(&self, _request: &LaunchRequest) -> io::Result<Captured> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}
