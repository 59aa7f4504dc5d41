//! Command-line interface for stoa.

pub mod args;
pub mod commands;
