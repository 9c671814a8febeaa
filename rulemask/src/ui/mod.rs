// rulemask/src/ui/mod.rs
pub mod diff_viewer;
pub mod mapping_summary;
pub mod output_format;
pub mod theme;
