use crate::env::EnvNames;
use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

const LIBEXEC: &str = "libexec";

/// Dispatcher configuration for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub root: PathBuf,
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let cache_dir = default_cache_dir(&name);
        Self {
            name,
            root: root.into(),
            cache_dir,
        }
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Directory whose tree defines the command namespace
    pub fn libexec_path(&self) -> PathBuf {
        self.root.join(LIBEXEC)
    }

    pub fn env_names(&self) -> EnvNames {
        EnvNames::new(&self.name)
    }
}

/// Resolve the tool root from the dispatcher flags.
///
/// Either `absolute` alone, or `executable` together with `relative`. The relative form
/// is resolved against the directory containing the (symlink-resolved) executable, which
/// is how a shim script locates the tree it ships with.
pub fn resolve_root(
    absolute: Option<&str>,
    executable: Option<&str>,
    relative: Option<&str>,
) -> Result<PathBuf> {
    match (absolute, executable, relative) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(Error::Config(
            "cannot use --absolute with --executable or --relative".to_string(),
        )),
        (Some(absolute), None, None) => {
            let root = expand_tilde(absolute);
            if !root.is_absolute() {
                return Err(Error::Config("--absolute path must be absolute".to_string()));
            }
            Ok(clean(&root))
        }
        (None, Some(executable), Some(relative)) => {
            let executable = normalize_path(&expand_tilde(executable));
            let base = executable.parent().ok_or_else(|| {
                Error::Config(format!(
                    "invalid executable path: {}",
                    executable.display()
                ))
            })?;
            Ok(normalize_path(&base.join(relative)))
        }
        (None, Some(_), None) | (None, None, Some(_)) => Err(Error::Config(
            "--executable and --relative must be used together".to_string(),
        )),
        (None, None, None) => Err(Error::Config(
            "must provide either --absolute or --executable with --relative".to_string(),
        )),
    }
}

/// Cache directory handed to scripts: the system cache dir, or `~/.cache` as a fallback.
pub fn default_cache_dir(name: &str) -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        return cache_dir.join(name);
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".cache").join(name);
    }

    std::env::temp_dir().join(name)
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Normalize a path (resolve to absolute, canonicalize if possible)
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            clean(path)
        } else {
            std::env::current_dir()
                .map(|cwd| clean(&cwd.join(path)))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

/// Lexically drop `.` and fold `..` components without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }
    cleaned
}
