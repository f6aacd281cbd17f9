use super::{HelpPage, qualified_name};
use crate::config::Config;
use crate::env::Environment;
use crate::launcher::{LaunchRequest, ProcessLauncher};
use crate::validation::{self, ValidationError};
use crate::{Error, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use sub_engine::UsageInfo;

/// An executable script in the command tree.
#[derive(Debug, Clone)]
pub struct FileCommand<'a> {
    config: &'a Config,
    segments: Vec<String>,
    path: PathBuf,
    args: Vec<String>,
    info: OnceCell<UsageInfo>,
}

impl<'a> FileCommand<'a> {
    pub fn new(config: &'a Config, segments: Vec<String>, path: PathBuf, args: Vec<String>) -> Self {
        Self {
            config,
            segments,
            path,
            args,
            info: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.segments
            .last()
            .map_or(self.config.name.as_str(), String::as_str)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn residual_args(&self) -> &[String] {
        &self.args
    }

    /// Script metadata, read on first access. Unreadable scripts have none.
    pub fn info(&self) -> &UsageInfo {
        self.info.get_or_init(|| {
            sub_engine::extract_from_path(&self.path).unwrap_or_else(|err| {
                tracing::debug!(path = %self.path.display(), %err, "could not read script metadata");
                UsageInfo::default()
            })
        })
    }

    pub fn summary(&self) -> Option<String> {
        self.info().summary.clone()
    }

    pub fn usage(&self) -> String {
        let command = qualified_name(self.config, &self.segments);
        match &self.info().usage {
            Some(template) => format!("Usage: {}", sub_engine::render_usage(template, &command)),
            None => format!("Usage: {} [args]...", command),
        }
    }

    pub fn help(&self) -> HelpPage {
        let info = self.info();
        HelpPage {
            usage: self.usage(),
            summary: info.summary.clone(),
            body: info.help.clone(),
            subcommands: Vec::new(),
        }
    }

    /// Build the launch request for an invocation, binding residual arguments first.
    ///
    /// Scripts that declare no flags or positionals get their arguments passed through
    /// as-is; otherwise a bind failure aborts before anything is launched.
    pub fn prepare(&self) -> Result<LaunchRequest> {
        let names = self.config.env_names();
        let info = self.info();

        let args_value = if info.declares_arguments() {
            let bound = sub_engine::bind(&self.args, &info.arg_specs)?;
            bound.to_env_value(&info.arg_specs)
        } else {
            self.args.join(" ")
        };

        let mut env = self.base_env();
        env.set(names.args(), args_value);

        Ok(LaunchRequest::new(&self.path)
            .args(self.args.iter().cloned())
            .env(env))
    }

    pub fn invoke(&self, launcher: &dyn ProcessLauncher) -> Result<i32> {
        let request = self.prepare()?;
        launcher.run(&request).map_err(Error::Launch)
    }

    /// Ask the script for completion candidates.
    ///
    /// Any failure, including a non-zero exit, means no completions.
    pub fn completions(&self, launcher: &dyn ProcessLauncher) -> Vec<String> {
        let names = self.config.env_names();
        let mut env = self.base_env();
        env.set(names.complete(), "true");
        // The word being completed is the last one typed.
        if let Some(last) = self.args.last() {
            env.set(names.complete_arg(), last);
        }

        let request = LaunchRequest::new(&self.path).env(env);
        match launcher.capture(&request) {
            Ok(captured) if captured.success() => String::from_utf8_lossy(&captured.stdout)
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            Ok(captured) => {
                tracing::debug!(code = captured.code, "script offered no completions");
                Vec::new()
            }
            Err(err) => {
                tracing::debug!(%err, "completion request failed");
                Vec::new()
            }
        }
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let Some(template) = &self.info().usage else {
            return Vec::new();
        };

        validation::check_usage(template)
            .into_iter()
            .map(|message| ValidationError {
                path: self.path.clone(),
                message: message.to_string(),
            })
            .collect()
    }

    fn base_env(&self) -> Environment {
        let names = self.config.env_names();
        let mut env = Environment::new();
        env.set_path(names.root(), &self.config.root)
            .set_path(names.cache(), &self.config.cache_dir);
        env
    }
}
