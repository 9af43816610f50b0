//! Common utility functions for command handlers

use anyhow::Result;

use crate::color;
use crate::store::MarkStore;

/// Open the bookmark store at its default location
///
/// A corrupt bookmark file is reported as a warning and treated as empty.
///
/// # Errors
/// Returns an error if:
/// - The home directory cannot be determined
/// - The bookmark file exists but cannot be read
pub fn open_store(color_mode: color::ColorMode) -> Result<MarkStore> {
    let Some(path) = MarkStore::default_path() else {
        anyhow::bail!(
            "Could not determine bookmark file location (HOME directory not found). \
             Please set the HOME environment variable."
        );
    };

    let store = MarkStore::open(path)?;
    if let Some(problem) = store.recovered_from() {
        eprintln!("{}", color::warn(color_mode, problem));
        eprintln!(
            "{}",
            color::info(color_mode, "Starting with an empty bookmark list")
        );
    }

    Ok(store)
}
