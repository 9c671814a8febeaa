// rulemask-core/src/engines/mod.rs
//! Concrete implementations of the `RedactionEngine` trait.
//!
//! `sequential` applies rules one after another over the progressively
//! redacted text, which is the only application order rulemask supports.

pub mod sequential;
