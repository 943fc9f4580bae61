//! Alfred workflow helper for Cursor
//!
//! Lists recently opened Cursor projects as Alfred script filter JSON
//! and opens a chosen project location, falling back from a direct
//! binary invocation to an `open -a` bootstrap plus AppleScript.

pub mod alfred;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod opener;
pub mod project;
pub mod store;
pub mod utils;

pub use error::{LauncherError, Result};
