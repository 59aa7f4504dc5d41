//! Storage layer for stoa.
//!
//! This module provides SQLite-based persistence for:
//! - Articles (the Stoic reading library)
//! - Practice sessions (breathing and meditation history)

mod database;
mod migrations;

pub use database::Database;
