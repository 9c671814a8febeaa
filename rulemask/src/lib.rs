// rulemask/src/lib.rs
//! # rulemask CLI Application
//!
//! The terminal front-end for `rulemask-core`: manage a saved list of find/replace
//! rules, load presets, and redact text from stdin or a file.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::{run, AppContext};
