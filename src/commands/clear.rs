//! Clear command - Delete the bookmark file

use anyhow::Result;
use std::path::Path;

use crate::color;
use crate::commands::common::open_store;
use crate::domain::path::display_path;
use crate::store::ClearOutcome;

/// Status line for a clear attempt on the store at `store_path`
#[must_use]
pub fn clear_message(
    outcome: &ClearOutcome,
    store_path: &Path,
    color_mode: color::ColorMode,
) -> String {
    match outcome {
        ClearOutcome::Removed => color::success(color_mode, "Cleared all bookmarks").to_string(),
        ClearOutcome::NothingToClear => {
            color::info(color_mode, "No bookmarks to clear").to_string()
        }
        ClearOutcome::PermissionDenied(err) => color::error(
            color_mode,
            format!("Cannot delete {}: {err}", display_path(store_path)),
        )
        .to_string(),
    }
}

/// Delete all bookmarks
///
/// A permission failure is reported on stderr and does not fail the command.
///
/// # Errors
/// Returns an error if the bookmark file cannot be read or removed for any
/// reason other than missing permissions
pub fn cmd_clear(color_mode: color::ColorMode) -> Result<()> {
    let mut store = open_store(color_mode)?;
    let outcome = store.clear()?;

    eprintln!("{}", clear_message(&outcome, store.path(), color_mode));
    Ok(())
}
