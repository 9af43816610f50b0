// Command handlers module
// This module contains all CLI command implementations

pub mod add;
pub mod clear;
pub mod common;
pub mod completion;
pub mod go;
pub mod list;
pub mod remove;
pub mod shell_init;
pub mod usage;
