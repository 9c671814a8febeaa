// rulemask/src/utils/mod.rs
pub mod clipboard;
pub mod prompt;
pub mod state_path;
