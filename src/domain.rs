// Domain modules
// Path resolution and bookmark formatting, independent of the store file

pub mod bookmark;
pub mod path;
