//! Configuration for hunk-view
//!
//! This crate provides:
//! - Config file discovery (CWD, platform config dir, home)
//! - View defaults (`ViewConfig`) used to build the diff table props
//! - The diff display mode shared with the renderer

pub mod config_file;
pub mod paths;
pub mod view_config;

pub use config_file::load_config_file;
pub use view_config::{DiffMode, ViewConfig};
