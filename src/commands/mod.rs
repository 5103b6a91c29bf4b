//! CLI commands

pub mod collections;
pub mod list;
