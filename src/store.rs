//! Bookmark store
//!
//! The store mirrors a JSON array of absolute directory paths kept in a single
//! file, most recent first. The file is read once when the store is opened and
//! rewritten after every mutation.

mod error;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub use error::MarkError;

use crate::domain::path::resolve_bookmark_path;

/// Name of the bookmark file inside the base directory
pub const STORE_FILE_NAME: &str = ".marks";

/// Result of [`MarkStore::clear`]
#[derive(Debug)]
pub enum ClearOutcome {
    /// The bookmark file was deleted
    Removed,
    /// There was no bookmark file to delete
    NothingToClear,
    /// The bookmark file could not be deleted; bookmarks are unchanged
    PermissionDenied(io::Error),
}

/// Ordered directory bookmarks backed by a JSON file
#[derive(Debug)]
pub struct MarkStore {
    path: PathBuf,
    dirs: Vec<String>,
    recovered_from: Option<MarkError>,
}

impl MarkStore {
    /// Default bookmark file location (`~/.marks`)
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| Self::path_in(&home))
    }

    /// Bookmark file location inside `base_dir`
    #[must_use]
    pub fn path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(STORE_FILE_NAME)
    }

    /// Open the store backed by `path`, loading existing bookmarks
    ///
    /// A missing file yields an empty store. A file that is not a JSON array
    /// of strings also yields an empty store; the decode error is kept and
    /// exposed through [`MarkStore::recovered_from`]. The file itself is left
    /// untouched until the next mutation.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, MarkError> {
        let path = path.into();
        let mut store = Self {
            path,
            dirs: Vec::new(),
            recovered_from: None,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<(), MarkError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(MarkError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(dirs) => self.dirs = dirs,
            Err(source) => {
                self.dirs.clear();
                self.recovered_from = Some(MarkError::CorruptStore {
                    path: self.path.clone(),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Write the current bookmarks to the store file, replacing its content
    ///
    /// # Errors
    /// Returns an error if the file or its parent directory cannot be written
    pub fn save(&self) -> Result<(), MarkError> {
        let io_err = |source| MarkError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = fs::File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.dirs)
            .map_err(|err| io_err(io::Error::from(err)))?;
        writer.flush().map_err(io_err)
    }

    /// Bookmark `path` as the most recent entry
    ///
    /// The path is resolved against the current directory and canonicalized.
    /// An existing bookmark for the same directory moves to the front.
    /// Returns the stored form of the path.
    ///
    /// # Errors
    /// Returns an error if the path cannot be resolved or the store cannot be saved
    pub fn add(&mut self, path: &Path) -> Result<&str, MarkError> {
        let resolved = resolve_bookmark_path(path).map_err(|source| MarkError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        let dir = resolved.into_os_string().into_string().map_err(|raw| {
            MarkError::NonUtf8Path(PathBuf::from(raw))
        })?;
        self.add_resolved(dir)
    }

    /// Bookmark an already resolved directory string as the most recent entry
    ///
    /// # Errors
    /// Returns an error if the store cannot be saved
    pub fn add_resolved(&mut self, dir: String) -> Result<&str, MarkError> {
        self.dirs.retain(|existing| *existing != dir);
        self.dirs.insert(0, dir);
        self.save()?;
        Ok(self.dirs[0].as_str())
    }

    /// Remove the bookmark at `index` and return it
    ///
    /// # Errors
    /// Returns [`MarkError::InvalidIndex`] if `index` is not an integer or is
    /// out of range, or an I/O error if the store cannot be saved
    pub fn remove(&mut self, index: &str) -> Result<String, MarkError> {
        let position = self.position(index)?;
        let removed = self.dirs.remove(position);
        self.save()?;
        Ok(removed)
    }

    /// Look up a bookmark
    ///
    /// Without an index this returns the most recent bookmark, or `None` when
    /// the store is empty.
    ///
    /// # Errors
    /// Returns [`MarkError::InvalidIndex`] if `index` is given and is not an
    /// integer or is out of range
    pub fn get(&self, index: Option<&str>) -> Result<Option<&str>, MarkError> {
        let Some(index) = index else {
            return Ok(self.dirs.first().map(String::as_str));
        };
        let position = self.position(index)?;
        Ok(Some(self.dirs[position].as_str()))
    }

    /// Ordered `(index, path)` pairs, most recent first
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate()
    }

    /// Iterate over bookmarked paths, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    /// Delete the bookmark file
    ///
    /// Permission failures are reported through [`ClearOutcome`] rather than
    /// as an error.
    ///
    /// # Errors
    /// Returns an error for any other failure to delete the file
    pub fn clear(&mut self) -> Result<ClearOutcome, MarkError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                self.dirs.clear();
                Ok(ClearOutcome::Removed)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.dirs.clear();
                Ok(ClearOutcome::NothingToClear)
            }
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                Ok(ClearOutcome::PermissionDenied(err))
            }
            Err(source) => Err(MarkError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Decode error that was recovered from while loading, if any
    #[must_use]
    pub const fn recovered_from(&self) -> Option<&MarkError> {
        self.recovered_from.as_ref()
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    fn position(&self, index: &str) -> Result<usize, MarkError> {
        parse_index(index, self.dirs.len())
            .ok_or_else(|| MarkError::InvalidIndex(index.to_string()))
    }
}

/// Parse a bookmark index for a list of `len` entries
///
/// Negative indices count from the end (`-1` is the oldest bookmark).
/// Surrounding whitespace is ignored.
#[must_use]
pub fn parse_index(raw: &str, len: usize) -> Option<usize> {
    let value: i64 = raw.trim().parse().ok()?;
    let len = i64::try_from(len).ok()?;
    let position = if value < 0 { value + len } else { value };
    if (0..len).contains(&position) {
        usize::try_from(position).ok()
    } else {
        None
    }
}
