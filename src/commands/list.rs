//! List command - Display bookmarks with their indices

use anyhow::Result;

use crate::color::{self, Stream};
use crate::commands::common::open_store;
use crate::domain::bookmark::format_bookmark_list;

/// List all bookmarks to stdout, most recent first
///
/// # Errors
/// Returns an error if the bookmark file cannot be read
pub fn cmd_list(color_mode: color::ColorMode) -> Result<()> {
    let store = open_store(color_mode)?;

    if store.is_empty() {
        eprintln!(
            "{}",
            color::info(color_mode, "No bookmarks yet. Use `mark add` to create one")
        );
        return Ok(());
    }

    let colorize = color_mode.should_colorize(Stream::Stdout);
    for line in format_bookmark_list(store.list(), colorize) {
        println!("{line}");
    }

    Ok(())
}
