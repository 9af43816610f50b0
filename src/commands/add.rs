//! Add command - Bookmark a directory

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::color;
use crate::commands::common::open_store;
use crate::domain::path::display_path;

/// Bookmark `dir`, or the current directory when omitted or empty
///
/// # Errors
/// Returns an error if:
/// - The current directory cannot be determined
/// - The bookmark file cannot be read or written
pub fn cmd_add(dir: Option<&str>, color_mode: color::ColorMode) -> Result<()> {
    let target = match dir.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let mut store = open_store(color_mode)?;
    let added = PathBuf::from(store.add(&target)?);

    eprintln!(
        "{}",
        color::success(color_mode, format!("Bookmarked {}", display_path(&added)))
    );
    Ok(())
}
