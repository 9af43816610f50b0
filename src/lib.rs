// Export modules for testing
pub mod cli;
pub mod color;
pub mod commands;
pub mod domain;
pub mod store;
