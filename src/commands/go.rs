//! Go command - Print a bookmarked path for the shell wrapper to `cd` into

use anyhow::Result;

use crate::color;
use crate::commands::common::open_store;

/// Print the bookmark at `index` (most recent when omitted) to stdout
///
/// Prints nothing when no index is given and there are no bookmarks.
///
/// # Errors
/// Returns an error if:
/// - The bookmark file cannot be read
/// - The index is not a number or is out of range
pub fn cmd_go(index: Option<&str>, color_mode: color::ColorMode) -> Result<()> {
    let store = open_store(color_mode)?;

    if let Some(path) = store.get(index)? {
        println!("{path}");
    }

    Ok(())
}
