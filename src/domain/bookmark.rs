//! Bookmark listing format
//!
//! Rows alternate between two colors so long listings stay readable. Whether
//! color is emitted is decided by the caller.

use owo_colors::OwoColorize;

/// Format one listing row as `index<TAB>path`
///
/// Even rows are bright cyan, odd rows bright blue.
#[must_use]
pub fn format_bookmark_line(index: usize, path: &str, colorize: bool) -> String {
    let line = format!("{index}\t{path}");
    if !colorize {
        return line;
    }

    if index % 2 == 0 {
        line.bright_cyan().to_string()
    } else {
        line.bright_blue().to_string()
    }
}

/// Format the full listing from `(index, path)` pairs
#[must_use]
pub fn format_bookmark_list<'a, I>(entries: I, colorize: bool) -> Vec<String>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    entries
        .into_iter()
        .map(|(index, path)| format_bookmark_line(index, path, colorize))
        .collect()
}
