use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    Executable,
}

/// A visible entry of the command tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// List the command entries of `dir` in filesystem enumeration order.
///
/// Dot-prefixed names are hidden. Directories are always listed, files only when they
/// carry an executable bit. Symlinks are followed; dangling ones are skipped.
pub fn list_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::trace!(path = %entry.path().display(), "skipping non UTF-8 entry");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let Ok(metadata) = fs::metadata(&path) else {
            tracing::trace!(path = %path.display(), "skipping unreadable entry");
            continue;
        };

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() && is_executable(&metadata) {
            EntryKind::Executable
        } else {
            continue;
        };

        entries.push(Entry { name, path, kind });
    }

    Ok(entries)
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    true
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn write(path: &Path, mode: u32) {
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn test_lists_directories_and_executables_only() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("run"), 0o755);
        write(&dir.path().join("README"), 0o644);
        write(&dir.path().join(".hidden"), 0o755);
        fs::create_dir(dir.path().join("group")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let mut names: Vec<(String, EntryKind)> = list_entries(dir.path())
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.kind))
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                ("group".to_string(), EntryKind::Directory),
                ("run".to_string(), EntryKind::Executable),
            ]
        );
    }

    #[test]
    fn test_dangling_symlink_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("link")).unwrap();

        assert!(list_entries(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_entries(&dir.path().join("missing")).is_err());
    }
}
