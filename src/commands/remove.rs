//! Remove command - Delete a bookmark by index

use anyhow::Result;
use std::path::Path;

use crate::color;
use crate::commands::common::open_store;
use crate::domain::path::display_path;

/// Remove the bookmark at `index`
///
/// # Errors
/// Returns an error if:
/// - The bookmark file cannot be read or written
/// - The index is not a number or is out of range
pub fn cmd_remove(index: &str, color_mode: color::ColorMode) -> Result<()> {
    let mut store = open_store(color_mode)?;
    let removed = store.remove(index)?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Removed {}", display_path(Path::new(&removed)))
        )
    );
    Ok(())
}
