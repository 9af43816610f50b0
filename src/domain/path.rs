//! Path resolution for bookmarked directories
//!
//! Resolution happens in two steps. `normalize_path` is purely lexical and
//! never touches the filesystem, `canonicalize_allow_missing` resolves
//! symlinks for whatever prefix of the path exists.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against `cwd` and resolve `.` and `..` lexically
///
/// `..` at the root stays at the root. Symlinks are not resolved.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use mark::domain::path::normalize_path;
///
/// let cwd = Path::new("/home/alice/proj");
/// assert_eq!(normalize_path(Path::new("../docs/./notes"), cwd), PathBuf::from("/home/alice/docs/notes"));
/// assert_eq!(normalize_path(Path::new("/srv//www/"), cwd), PathBuf::from("/srv/www"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path, cwd: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

/// Canonicalize an absolute path, even if it doesn't exist on the filesystem
///
/// For missing paths, canonicalize the deepest existing ancestor and append the tail.
/// If no ancestor can be canonicalized, the input is returned unchanged.
#[must_use]
pub fn canonicalize_allow_missing(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let mut tail = Vec::new();
    let mut current = path;
    while let Some(parent) = current.parent() {
        if let Some(name) = current.file_name() {
            tail.push(name);
        }
        if let Ok(base) = parent.canonicalize() {
            return tail.iter().rev().fold(base, |acc, name| acc.join(name));
        }
        current = parent;
    }

    path.to_path_buf()
}

/// Resolve a user-supplied directory to the form stored as a bookmark
///
/// # Errors
/// Returns an error if the current working directory cannot be determined
pub fn resolve_bookmark_path(path: &Path) -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(canonicalize_allow_missing(&normalize_path(path, &cwd)))
}

/// Convert an absolute path to home-relative display format
///
/// Returns "~/path" if under the home directory, otherwise the path itself.
/// Only for human-facing messages; stdout always carries absolute paths.
#[must_use]
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rel) = path.strip_prefix(&home) {
            let rel_str = rel.display().to_string();
            if rel_str.is_empty() {
                return "~".to_string();
            }
            return format!("~/{rel_str}");
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_normalize_relative_joins_cwd() {
        let cwd = Path::new("/home/alice");
        assert_eq!(
            normalize_path(Path::new("proj"), cwd),
            PathBuf::from("/home/alice/proj")
        );
    }

    #[test]
    fn test_normalize_dot_is_cwd() {
        let cwd = Path::new("/home/alice/proj");
        assert_eq!(normalize_path(Path::new("."), cwd), cwd);
    }

    #[test]
    fn test_normalize_absolute_ignores_cwd() {
        let cwd = Path::new("/home/alice");
        assert_eq!(
            normalize_path(Path::new("/var/log/../tmp"), cwd),
            PathBuf::from("/var/tmp")
        );
    }

    #[test]
    fn test_normalize_parent_beyond_root() {
        let cwd = Path::new("/");
        assert_eq!(
            normalize_path(Path::new("../../etc"), cwd),
            PathBuf::from("/etc")
        );
    }

    #[test]
    fn test_normalize_strips_trailing_separator() {
        let cwd = Path::new("/home/alice");
        assert_eq!(
            normalize_path(Path::new("docs/"), cwd),
            PathBuf::from("/home/alice/docs")
        );
    }

    #[test]
    fn test_canonicalize_existing_dir() {
        let temp = tempfile::tempdir().unwrap();
        let canonical = temp.path().canonicalize().unwrap();
        assert_eq!(canonicalize_allow_missing(temp.path()), canonical);
    }

    #[test]
    fn test_canonicalize_missing_tail() {
        let temp = tempfile::tempdir().unwrap();
        let canonical = temp.path().canonicalize().unwrap();
        let missing = temp.path().join("not").join("there");
        assert_eq!(
            canonicalize_allow_missing(&missing),
            canonical.join("not").join("there")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_canonicalize_resolves_symlink() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("target");
        std::fs::create_dir(&target).unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(
            canonicalize_allow_missing(&link),
            target.canonicalize().unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_display_path_under_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(display_path(&home.join("proj/mark")), "~/proj/mark");
        }
    }

    #[test]
    #[serial]
    fn test_display_path_home_itself() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(display_path(&home), "~");
        }
    }

    #[test]
    #[serial]
    fn test_display_path_outside_home() {
        temp_env::with_var("HOME", Some("/home/alice"), || {
            assert_eq!(display_path(Path::new("/tmp/test/path")), "/tmp/test/path");
        });
    }
}
